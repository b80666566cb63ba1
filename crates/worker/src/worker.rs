// SPDX-License-Identifier: MIT

//! The per-router persistent worker: one long-lived session, one
//! command mailbox, one cache, one lifecycle state machine.

use crate::cache::WorkerCache;
use crate::command::{Command, CommandKind, CommandOutcome};
use crate::error::{SubmitError, WorkerError};
use crate::ready::ReadyBarrier;
use crate::subscriber_sink::SubscriberSink;
use fleet_core::{Router, RouterId};
use fleet_protocol::{commands, DeviceSession, DeviceSessionFactory};
use fleet_webhook::{WebhookEvent, WebhookSink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Commands queue behind at most this many entries before a producer
/// must back off (HTTP handlers return 503; the ticker drops the tick).
pub const MAILBOX_CAPACITY: usize = 10;

const DIAL_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(5);
const DIAL_RETRY_INTERVAL: Duration = Duration::from_secs(5);
const BACKOFF_INTERVAL: Duration = Duration::from_secs(3);

/// Handle to one router's worker. Deliberately thin: it carries no
/// session state itself — that lives only on the lifecycle task's own
/// stack, so nothing outside that task can ever reach it.
pub struct Worker {
    router: Router,
    mailbox: mpsc::Sender<Command>,
    cache: Arc<WorkerCache>,
    online: Arc<AtomicBool>,
}

impl Worker {
    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn id(&self) -> RouterId {
        self.router.id
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    pub fn cache(&self) -> &WorkerCache {
        &self.cache
    }

    /// Enqueue a command without blocking. Fails fast if the mailbox is
    /// full or the lifecycle task has stopped consuming it.
    pub fn try_submit(&self, command: Command) -> Result<(), SubmitError> {
        self.mailbox.try_send(command).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => SubmitError::MailboxFull,
            mpsc::error::TrySendError::Closed(_) => SubmitError::WorkerGone,
        })
    }
}

/// Spawn a worker's lifecycle task and ticker task, returning the handle
/// the pool registers. `ready` is signaled exactly once by the lifecycle
/// task, per spec: on the first successful warmup or the first failed
/// dial attempt, whichever happens first.
pub fn spawn<F>(
    router: Router,
    factory: Arc<F>,
    subscriber_sink: Arc<dyn SubscriberSink>,
    webhook: Arc<dyn WebhookSink>,
    ready: Arc<ReadyBarrier>,
    refresh_interval: Duration,
) -> Arc<Worker>
where
    F: DeviceSessionFactory,
{
    let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);
    let cache = Arc::new(WorkerCache::new());
    let online = Arc::new(AtomicBool::new(false));

    let worker = Arc::new(Worker {
        router: router.clone(),
        mailbox: tx.clone(),
        cache: cache.clone(),
        online: online.clone(),
    });

    tokio::spawn(run_lifecycle(
        router.clone(),
        factory,
        tx.clone(),
        rx,
        cache.clone(),
        online.clone(),
        subscriber_sink,
        webhook,
        ready,
    ));
    tokio::spawn(run_ticker(tx, online, refresh_interval));

    worker
}

async fn run_ticker(mailbox: mpsc::Sender<Command>, online: Arc<AtomicBool>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await; // first tick fires immediately; skip it
    loop {
        ticker.tick().await;
        if !online.load(Ordering::Acquire) {
            continue;
        }
        // Non-blocking: a full mailbox means a refresh is already
        // pending, so dropping this tick is the correct behavior, never
        // stalling the ticker task.
        let _ = mailbox.try_send(Command::fire_and_forget(CommandKind::RefreshMetrics));
    }
}

async fn run_lifecycle<F: DeviceSessionFactory>(
    router: Router,
    factory: Arc<F>,
    self_tx: mpsc::Sender<Command>,
    mut mailbox: mpsc::Receiver<Command>,
    cache: Arc<WorkerCache>,
    online: Arc<AtomicBool>,
    subscriber_sink: Arc<dyn SubscriberSink>,
    webhook: Arc<dyn WebhookSink>,
    ready: Arc<ReadyBarrier>,
) {
    let mut ready_signaled = false;

    loop {
        tracing::info!(router_id = %router.id, host = %router.host, "dialing router");
        let dial_result = factory.dial(&router, DIAL_ATTEMPT_TIMEOUT).await;

        let mut session = match dial_result {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(router_id = %router.id, error = %err, "dial failed, will retry");
                online.store(false, Ordering::Release);
                if !ready_signaled {
                    ready.signal().await;
                    ready_signaled = true;
                }
                tokio::time::sleep(DIAL_RETRY_INTERVAL).await;
                continue;
            }
        };

        if let Err(err) = refresh_cache(&mut session, &router, &cache).await {
            tracing::warn!(router_id = %router.id, error = %err, "initial warmup refresh failed");
        }
        // Self-enqueue SYNC so it runs as the first Serving-phase
        // command rather than blocking warmup on the store round trip.
        let _ = self_tx.try_send(Command::fire_and_forget(CommandKind::Sync));

        online.store(true, Ordering::Release);
        if !ready_signaled {
            ready.signal().await;
            ready_signaled = true;
        }
        tracing::info!(router_id = %router.id, host = %router.host, "router connected");
        spawn_webhook(&webhook, WebhookEvent::router_up(router.id, router.host.clone()));

        serve(&mut session, &router, &cache, &subscriber_sink, &mut mailbox).await;

        let was_online = online.swap(false, Ordering::AcqRel);
        tracing::warn!(router_id = %router.id, "router disconnected, draining");
        drain_with_error(&mut mailbox);
        if was_online {
            spawn_webhook(
                &webhook,
                WebhookEvent::router_down(router.id, router.host.clone(), "connection lost"),
            );
        }

        tokio::time::sleep(BACKOFF_INTERVAL).await;
    }
}

/// Serving phase: dequeue commands FIFO and execute them sequentially
/// against the one open session. Returns as soon as a terminal session
/// error is observed, or the mailbox is closed.
async fn serve(
    session: &mut dyn DeviceSession,
    router: &Router,
    cache: &WorkerCache,
    subscriber_sink: &Arc<dyn SubscriberSink>,
    mailbox: &mut mpsc::Receiver<Command>,
) {
    while let Some(command) = mailbox.recv().await {
        let kind_name = command.kind.name();
        match dispatch(session, router, cache, subscriber_sink, command).await {
            Ok(()) => {}
            Err(err) => {
                tracing::error!(router_id = %router.id, kind = kind_name, error = %err, "terminal session error");
                return;
            }
        }
    }
}

/// Run one command. Returns `Err` only for terminal session failures —
/// the caller must tear down and redial in that case. Non-terminal
/// failures (device rejected the command, lookup came back empty) are
/// delivered to the command's sink and the session stays in service.
async fn dispatch(
    session: &mut dyn DeviceSession,
    router: &Router,
    cache: &WorkerCache,
    subscriber_sink: &Arc<dyn SubscriberSink>,
    command: Command,
) -> Result<(), fleet_protocol::SessionError> {
    let Command { kind, sink } = command;
    match kind {
        CommandKind::Sync => match commands::get_all_secrets(session).await {
            Ok(records) => {
                if let Some(sink) = sink {
                    let _ = sink.send(Ok(CommandOutcome::Synced));
                }
                let subscriber_sink = subscriber_sink.clone();
                let router_id = router.id;
                tokio::spawn(async move { subscriber_sink.upsert_many(router_id, records).await });
                Ok(())
            }
            Err(err) => fail(sink, err),
        },
        CommandKind::CreateSecret(payload) => {
            match commands::add_secret(
                session,
                &payload.user,
                &payload.password,
                &payload.profile,
                payload.local_ip.as_deref(),
                payload.remote_ip.as_deref(),
                &payload.comment,
            )
            .await
            {
                Ok(()) => succeed(sink),
                Err(err) => fail(sink, err),
            }
        }
        CommandKind::UpdateSecret(payload) => {
            match commands::set_secret_profile(session, &payload.user, &payload.profile).await {
                Ok(()) => succeed(sink),
                Err(err) => fail(sink, err),
            }
        }
        CommandKind::Isolate(payload) => {
            match commands::set_address_list_membership(
                session,
                payload.action,
                &payload.ip,
                &payload.list,
                &payload.comment,
            )
            .await
            {
                Ok(()) => succeed(sink),
                Err(err) => fail(sink, err),
            }
        }
        CommandKind::GetTraffic { user } => match commands::get_queue_traffic(session, &user).await {
            Ok(stats) => {
                if let Some(sink) = sink {
                    let _ = sink.send(Ok(CommandOutcome::Traffic(stats)));
                }
                Ok(())
            }
            Err(err) => fail(sink, err),
        },
        CommandKind::Backup { filename } => match commands::run_backup(session, &filename).await {
            Ok(()) => succeed(sink),
            Err(err) => fail(sink, err),
        },
        CommandKind::RefreshMetrics => {
            if let Err(err) = refresh_cache(session, router, cache).await {
                tracing::warn!(router_id = %router.id, error = %err, "periodic refresh failed");
                if err.is_terminal() {
                    return Err(err);
                }
            }
            Ok(())
        }
    }
}

fn succeed(sink: Option<crate::command::CommandSink>) -> Result<(), fleet_protocol::SessionError> {
    if let Some(sink) = sink {
        let _ = sink.send(Ok(CommandOutcome::Success));
    }
    Ok(())
}

/// Deliver a failure to the caller; a terminal error also propagates up
/// so the caller tears the session down and redials.
fn fail(
    sink: Option<crate::command::CommandSink>,
    err: fleet_protocol::SessionError,
) -> Result<(), fleet_protocol::SessionError> {
    let terminal = err.is_terminal();
    if let Some(sink) = sink {
        let _ = sink.send(Err(WorkerError::Session(err.clone())));
    }
    if terminal {
        return Err(err);
    }
    Ok(())
}

/// Deliver an `offline` error to every command still queued after a
/// terminal session failure, rather than leaving their callers waiting
/// on a session that will never come back.
fn drain_with_error(mailbox: &mut mpsc::Receiver<Command>) {
    while let Ok(command) = mailbox.try_recv() {
        command.reply(Err(WorkerError::Offline));
    }
}

async fn refresh_cache(
    session: &mut dyn DeviceSession,
    router: &Router,
    cache: &WorkerCache,
) -> Result<(), fleet_protocol::SessionError> {
    let users = commands::get_active_users(session, router.id).await;
    let resources = commands::get_system_resource(session).await;

    let users_err = users.as_ref().err().cloned();
    let resources_err = resources.as_ref().err().cloned();
    cache.apply_refresh(users.ok(), resources.ok());

    // A single failing call keeps the previous cached value for that
    // field and is not itself fatal; only report upward when both
    // calls on this session failed, since that is the stronger signal
    // the session itself is the problem.
    match (users_err, resources_err) {
        (Some(err), Some(_)) => Err(err),
        _ => Ok(()),
    }
}

fn spawn_webhook(sink: &Arc<dyn WebhookSink>, event: WebhookEvent) {
    let sink = sink.clone();
    tokio::spawn(async move {
        if let Err(err) = sink.send(event).await {
            tracing::warn!(error = %err, "webhook delivery failed");
        }
    });
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
