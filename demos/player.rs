//! Player packet - encode a record by hand and read it back.
//!
//! This demo shows:
//! - Sizing a packet up front for a known field sequence
//! - Writing fields in an application-defined order
//! - Resetting the cursor and reading the same order back
//!
//! ```text
//! cargo run --example player
//! RUST_LOG=trace cargo run --example player
//! ```

use packwire::packet::SHORT_PREFIX_SIZE;
use packwire::Packet;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
struct PlayerPosition {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Debug, Clone, PartialEq)]
struct Player {
    id: u32,
    name: String,
    location: PlayerPosition,
    stats: Vec<i16>,
}

impl Player {
    fn encoded_len(&self) -> usize {
        4 + SHORT_PREFIX_SIZE + self.name.len() + 12 + 2 + self.stats.len() * 2
    }

    // Field order here is the wire format; read_from must mirror it.
    fn write_to(&self, packet: &mut Packet) -> packwire::Result<()> {
        packet.write_u32(self.id)?;
        packet.write_string(&self.name)?;
        packet.write_f32(self.location.x)?;
        packet.write_f32(self.location.y)?;
        packet.write_f32(self.location.z)?;
        packet.write_i16(self.stats.len() as i16)?;
        for stat in &self.stats {
            packet.write_i16(*stat)?;
        }
        Ok(())
    }

    fn read_from(packet: &mut Packet) -> packwire::Result<Self> {
        let id = packet.read_u32()?;
        let name = packet.read_string()?;
        let location = PlayerPosition {
            x: packet.read_f32()?,
            y: packet.read_f32()?,
            z: packet.read_f32()?,
        };
        let count = packet.read_i16()?.max(0) as usize;
        let stats = (0..count)
            .map(|_| packet.read_i16())
            .collect::<packwire::Result<Vec<_>>>()?;
        Ok(Self {
            id,
            name,
            location,
            stats,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let player = Player {
        id: 1337,
        name: "Zeroeh".to_string(),
        location: PlayerPosition {
            x: 103.71,
            y: 2123.71,
            z: 14.71,
        },
        stats: (0..4).collect(),
    };
    println!("Player: {:?}", player);

    let mut packet = Packet::new(player.encoded_len());
    player.write_to(&mut packet)?;
    println!("Player as bytes: {:?}", packet.written());

    // Same packet, so rewind instead of building a new one.
    packet.reset();
    let decoded = Player::read_from(&mut packet)?;
    println!("Player re-read: {:?}", decoded);
    assert_eq!(decoded, player);

    // Writing past the end is an error, not a crash.
    if let Err(e) = packet.write_u32(0) {
        println!("Full packet rejected write: {}", e);
    }

    Ok(())
}
