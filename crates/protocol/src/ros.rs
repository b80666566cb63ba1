// SPDX-License-Identifier: MIT

//! Real [`DeviceSessionFactory`]/[`DeviceSession`] implementation, talking
//! the RouterOS API binary protocol directly over TCP.
//!
//! Sentences are sequences of length-prefixed words terminated by a
//! zero-length word. A reply sentence starts with one of `!done`, `!re`,
//! `!trap`, or `!fatal`, followed by `=key=value` attribute words. Login
//! is a single `/login` sentence carrying `=name=` and `=password=`
//! words — the plaintext flow RouterOS has supported since v6.43, not
//! the older two-stage MD5-challenge login.

use crate::error::SessionError;
use crate::session::{DeviceSession, DeviceSessionFactory, Row};
use async_trait::async_trait;
use fleet_core::Router;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Dials real TCP connections to a router's API port.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosSessionFactory;

#[async_trait]
impl DeviceSessionFactory for RosSessionFactory {
    type Session = RosSession;

    async fn dial(&self, router: &Router, dial_timeout: Duration) -> Result<Self::Session, SessionError> {
        let addr = format!("{}:{}", router.host, router.port);
        let stream = timeout(dial_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| SessionError::Timeout(dial_timeout))?
            .map_err(|e| SessionError::Io(e.to_string()))?;
        stream
            .set_nodelay(true)
            .map_err(|e| SessionError::Io(e.to_string()))?;

        let (read_half, write_half) = stream.into_split();
        let mut session = RosSession {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        };
        session.login(&router.username, &router.password).await?;
        Ok(session)
    }
}

/// One open RouterOS API connection. Not `Clone`/`Sync` by construction
/// (the underlying `TcpStream` halves are owned, not shared).
pub struct RosSession {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl RosSession {
    async fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        self.write_sentence(&[
            "/login".to_string(),
            format!("=name={username}"),
            format!("=password={password}"),
        ])
        .await?;
        let reply = self.read_sentence().await?;
        match reply.tag.as_str() {
            "!done" => Ok(()),
            "!trap" | "!fatal" => Err(SessionError::Protocol(reply.message())),
            other => Err(SessionError::Protocol(format!("unexpected login reply {other}"))),
        }
    }

    async fn write_sentence(&mut self, words: &[String]) -> Result<(), SessionError> {
        for word in words {
            write_word(&mut self.writer, word).await?;
        }
        write_length(&mut self.writer, 0).await?;
        self.writer
            .flush()
            .await
            .map_err(|e| SessionError::Io(e.to_string()))
    }

    async fn read_sentence(&mut self) -> Result<Sentence, SessionError> {
        let mut words = Vec::new();
        loop {
            let word = read_word(&mut self.reader).await?;
            match word {
                Some(word) => words.push(word),
                None => break,
            }
        }
        Sentence::from_words(words)
    }
}

#[async_trait]
impl DeviceSession for RosSession {
    async fn run(&mut self, path: &str, args: &[String]) -> Result<Vec<Row>, SessionError> {
        let mut words = Vec::with_capacity(args.len() + 1);
        words.push(path.to_string());
        words.extend(args.iter().cloned());
        self.write_sentence(&words).await?;

        let mut rows = Vec::new();
        loop {
            let sentence = self.read_sentence().await?;
            match sentence.tag.as_str() {
                "!re" => rows.push(sentence.attrs),
                "!done" => return Ok(rows),
                "!trap" | "!fatal" => return Err(SessionError::DeviceError(sentence.message())),
                other => return Err(SessionError::Protocol(format!("unexpected reply tag {other}"))),
            }
        }
    }
}

#[derive(Debug)]
struct Sentence {
    tag: String,
    attrs: Row,
}

impl Sentence {
    fn from_words(mut words: Vec<String>) -> Result<Self, SessionError> {
        if words.is_empty() {
            return Err(SessionError::Protocol("empty reply sentence".into()));
        }
        let tag = words.remove(0);
        let mut attrs = Row::new();
        for word in words {
            if let Some(rest) = word.strip_prefix('=') {
                if let Some((key, value)) = rest.split_once('=') {
                    attrs.insert(key.to_string(), value.to_string());
                }
            }
        }
        Ok(Self { tag, attrs })
    }

    fn message(&self) -> String {
        self.attrs
            .get("message")
            .cloned()
            .unwrap_or_else(|| format!("device returned {}", self.tag))
    }
}

async fn write_word<W: AsyncWriteExt + Unpin>(writer: &mut W, word: &str) -> Result<(), SessionError> {
    let bytes = word.as_bytes();
    write_length(writer, bytes.len()).await?;
    writer
        .write_all(bytes)
        .await
        .map_err(|e| SessionError::Io(e.to_string()))
}

async fn write_length<W: AsyncWriteExt + Unpin>(writer: &mut W, len: usize) -> Result<(), SessionError> {
    let encoded: Vec<u8> = if len < 0x80 {
        vec![len as u8]
    } else if len < 0x4000 {
        let v = len as u32 | 0x8000;
        vec![(v >> 8) as u8, v as u8]
    } else if len < 0x20_0000 {
        let v = len as u32 | 0x00C0_0000;
        vec![(v >> 16) as u8, (v >> 8) as u8, v as u8]
    } else if len < 0x1000_0000 {
        let v = len as u32 | 0xE000_0000;
        vec![(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8]
    } else {
        let len = len as u32;
        vec![
            0xF0,
            (len >> 24) as u8,
            (len >> 16) as u8,
            (len >> 8) as u8,
            len as u8,
        ]
    };
    writer
        .write_all(&encoded)
        .await
        .map_err(|e| SessionError::Io(e.to_string()))
}

/// Returns `None` for the sentence-terminating zero-length word.
async fn read_word<R: AsyncReadExt + Unpin>(reader: &mut R) -> Result<Option<String>, SessionError> {
    let len = read_length(reader).await?;
    if len == 0 {
        return Ok(None);
    }
    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .await
        .map_err(|e| SessionError::Io(e.to_string()))?;
    String::from_utf8(buf)
        .map(Some)
        .map_err(|e| SessionError::Protocol(e.to_string()))
}

async fn read_length<R: AsyncReadExt + Unpin>(reader: &mut R) -> Result<usize, SessionError> {
    let first = reader
        .read_u8()
        .await
        .map_err(|e| SessionError::Io(e.to_string()))?;

    if first & 0x80 == 0 {
        Ok(first as usize)
    } else if first & 0xC0 == 0x80 {
        let second = reader.read_u8().await.map_err(|e| SessionError::Io(e.to_string()))?;
        Ok((((first & !0xC0) as usize) << 8) | second as usize)
    } else if first & 0xE0 == 0xC0 {
        let mut rest = [0u8; 2];
        reader
            .read_exact(&mut rest)
            .await
            .map_err(|e| SessionError::Io(e.to_string()))?;
        Ok((((first & !0xE0) as usize) << 16) | ((rest[0] as usize) << 8) | rest[1] as usize)
    } else if first & 0xF0 == 0xE0 {
        let mut rest = [0u8; 3];
        reader
            .read_exact(&mut rest)
            .await
            .map_err(|e| SessionError::Io(e.to_string()))?;
        Ok((((first & !0xF0) as usize) << 24)
            | ((rest[0] as usize) << 16)
            | ((rest[1] as usize) << 8)
            | rest[2] as usize)
    } else {
        let mut rest = [0u8; 4];
        reader
            .read_exact(&mut rest)
            .await
            .map_err(|e| SessionError::Io(e.to_string()))?;
        Ok(u32::from_be_bytes(rest) as usize)
    }
}

#[cfg(test)]
#[path = "ros_tests.rs"]
mod tests;
