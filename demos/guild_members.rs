//! Lists the members of a guild on every server.
//!
//! Usage: `cargo run --example guild_members -- TEMPLARS_ORDER`

use albion::prelude::*;
use albion::{EntityKind, Error};

#[tokio::main]
async fn main() -> albion::Result<()> {
    let guild = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "TEMPLARS_ORDER".to_string());

    for server in Server::ALL {
        println!("{server}:");
        let client = Client::from_server(server)?;

        let guild_id = match client.get_guild_id(&guild).await {
            Ok(id) => id,
            Err(Error::NotFound {
                kind: EntityKind::Guild,
                ..
            }) => {
                println!("  no guild named {guild}");
                continue;
            }
            Err(err) => return Err(err),
        };

        let members = client.get_guild_members(guild_id).await?;
        println!("  {} members", members.len());
        for member in members {
            println!("  - {}", member.name);
        }
    }

    Ok(())
}
