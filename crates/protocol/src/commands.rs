// SPDX-License-Identifier: MIT

//! Router operations built on top of [`crate::DeviceSession::run`].
//!
//! Each function here issues exactly one command (occasionally a lookup
//! followed by a mutation) and translates the raw [`Row`] results into a
//! typed value. None of this is part of the `DeviceSession` trait itself
//! so that adding an operation never touches the trait's object-safety.

use crate::error::SessionError;
use crate::session::{DeviceSession, Row};
use fleet_core::{ActiveUser, DeviceResources, IsolateAction, RouterId, SubscriberRecord, TrafficStats};

fn arg(key: &str, value: &str) -> String {
    format!("={key}={value}")
}

/// Add a new PPPoE secret.
pub async fn add_secret(
    session: &mut dyn DeviceSession,
    user: &str,
    password: &str,
    profile: &str,
    local_ip: Option<&str>,
    remote_ip: Option<&str>,
    comment: &str,
) -> Result<(), SessionError> {
    let mut args = vec![
        arg("name", user),
        arg("password", password),
        arg("profile", profile),
        arg("comment", comment),
    ];
    if let Some(ip) = local_ip {
        args.push(arg("local-address", ip));
    }
    if let Some(ip) = remote_ip {
        args.push(arg("remote-address", ip));
    }
    session.run("/ppp/secret/add", &args).await?;
    Ok(())
}

/// Change an existing secret's profile, looking up its internal id first.
pub async fn set_secret_profile(
    session: &mut dyn DeviceSession,
    user: &str,
    new_profile: &str,
) -> Result<(), SessionError> {
    let rows = session
        .run(
            "/ppp/secret/print",
            &[format!("?name={user}"), "=.proplist=.id".to_string()],
        )
        .await?;
    let id = rows
        .first()
        .and_then(|row| row.get(".id"))
        .ok_or_else(|| SessionError::NotFound(format!("secret {user}")))?
        .clone();
    session
        .run("/ppp/secret/set", &[arg(".id", &id), arg("profile", new_profile)])
        .await?;
    Ok(())
}

/// List every configured PPPoE secret's name, profile, and disabled flag.
pub async fn get_all_secrets(session: &mut dyn DeviceSession) -> Result<Vec<SubscriberRecord>, SessionError> {
    let rows = session
        .run("/ppp/secret/print", &["=.proplist=name,profile,disabled".to_string()])
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| SubscriberRecord {
            user: row.get("name").cloned().unwrap_or_default(),
            profile: row.get("profile").cloned().unwrap_or_default(),
            disabled: row.get("disabled").map(String::as_str) == Some("true"),
        })
        .collect())
}

/// Add or remove an address from a firewall address list, per [`IsolateAction`].
pub async fn set_address_list_membership(
    session: &mut dyn DeviceSession,
    action: IsolateAction,
    ip: &str,
    list: &str,
    comment: &str,
) -> Result<(), SessionError> {
    match action {
        IsolateAction::Add => {
            session
                .run(
                    "/ip/firewall/address-list/add",
                    &[arg("address", ip), arg("list", list), arg("comment", comment)],
                )
                .await?;
        }
        IsolateAction::Remove => {
            let rows = session
                .run(
                    "/ip/firewall/address-list/print",
                    &[format!("?address={ip}"), format!("?list={list}"), "=.proplist=.id".to_string()],
                )
                .await?;
            for row in rows {
                if let Some(id) = row.get(".id") {
                    session
                        .run("/ip/firewall/address-list/remove", &[arg(".id", id)])
                        .await?;
                }
            }
        }
    }
    Ok(())
}

/// Fetch every currently-connected PPPoE session.
pub async fn get_active_users(
    session: &mut dyn DeviceSession,
    router_id: RouterId,
) -> Result<Vec<ActiveUser>, SessionError> {
    let rows = session
        .run(
            "/ppp/active/print",
            &["=.proplist=name,address,caller-id,uptime".to_string()],
        )
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| ActiveUser {
            name: row.get("name").cloned().unwrap_or_default(),
            address: row.get("address").cloned().unwrap_or_default(),
            caller_id: row.get("caller-id").cloned().unwrap_or_default(),
            uptime: row.get("uptime").cloned().unwrap_or_default(),
            router_id,
        })
        .collect())
}

fn parse_i64(row: &Row, key: &str) -> i64 {
    row.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Fetch the device's own resource/health snapshot.
pub async fn get_system_resource(session: &mut dyn DeviceSession) -> Result<DeviceResources, SessionError> {
    let rows = session.run("/system/resource/print", &[]).await?;
    let row = rows
        .first()
        .ok_or_else(|| SessionError::Protocol("system resource query returned no rows".into()))?;
    Ok(DeviceResources {
        uptime: row.get("uptime").cloned().unwrap_or_default(),
        cpu_load: row.get("cpu-load").cloned().unwrap_or_default(),
        board_name: row.get("board-name").cloned().unwrap_or_default(),
        version: row.get("version").cloned().unwrap_or_default(),
        total_memory: parse_i64(row, "total-memory"),
        free_memory: parse_i64(row, "free-memory"),
    })
}

/// Fetch a subscriber's simple-queue rate, falling back to a substring
/// scan of every queue's name when no queue is named exactly `target`.
pub async fn get_queue_traffic(
    session: &mut dyn DeviceSession,
    target: &str,
) -> Result<TrafficStats, SessionError> {
    let exact = session
        .run(
            "/queue/simple/print",
            &[format!("?name={target}"), "=.proplist=rate,name".to_string()],
        )
        .await?;

    let raw_rate = if let Some(row) = exact.first() {
        row.get("rate").cloned().unwrap_or_default()
    } else {
        let all = session
            .run("/queue/simple/print", &["=.proplist=rate,name".to_string()])
            .await?;
        let found = all
            .iter()
            .find(|row| row.get("name").map(|n| n.contains(target)).unwrap_or(false));
        match found {
            Some(row) => row.get("rate").cloned().unwrap_or_default(),
            None => return Err(SessionError::NotFound(format!("queue for {target}"))),
        }
    };

    let (rx, tx) = parse_rate(&raw_rate);
    Ok(TrafficStats {
        name: target.to_string(),
        rx,
        tx,
    })
}

/// Parse a RouterOS `"rx/tx"` rate string into its two components.
fn parse_rate(raw: &str) -> (i64, i64) {
    let mut parts = raw.splitn(2, '/');
    let rx = parts.next().and_then(|v| v.parse().ok()).unwrap_or(0);
    let tx = parts.next().and_then(|v| v.parse().ok()).unwrap_or(0);
    (rx, tx)
}

/// Trigger a device-side backup file write.
pub async fn run_backup(session: &mut dyn DeviceSession, name: &str) -> Result<(), SessionError> {
    session.run("/system/backup/save", &[arg("name", name)]).await?;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
