//! Table actor: one task per game that owns a [`GameFlow`], serializes every
//! action through a command channel, drives automated seats and broadcasts
//! the resulting events.

use std::time::Duration;

use serde::Serialize;
use serde_json::json;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::ai::create_ai;
use crate::config::EngineConfig;
use crate::domain::rules::PLAYERS;
use crate::domain::seed_derivation::{game_seed_from_u64, random_game_seed};
use crate::domain::snapshot::{GameSnapshot, SeatView};
use crate::domain::{GameEvent, Seat, SeatKind};
use crate::error::AppError;
use crate::services::game_flow::{FlowOptions, GameFlow, PlayerAction, SeatAis, SeatConfig};

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub seats: [SeatConfig; PLAYERS],
    /// Registered AI used for every automated seat.
    pub ai_type: String,
    /// Fixed game seed; a fresh OS seed when None.
    pub seed: Option<u64>,
    pub starting_dealer: Seat,
    pub config: EngineConfig,
}

impl TableOptions {
    pub fn new(seats: [SeatConfig; PLAYERS]) -> Self {
        Self {
            seats,
            ai_type: "house".to_string(),
            seed: None,
            starting_dealer: 0,
            config: EngineConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }
}

/// A game event stamped with its table and position in the table's stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEvent {
    pub table_id: Uuid,
    pub seq: u64,
    pub event: GameEvent,
}

type Reply<T> = oneshot::Sender<Result<T, AppError>>;

enum Command {
    Start {
        reply: Reply<Vec<GameEvent>>,
    },
    Act {
        seat: Seat,
        action: PlayerAction,
        reply: Reply<Vec<GameEvent>>,
    },
    AbortRound {
        reply: Reply<Vec<GameEvent>>,
    },
    Snapshot {
        reply: Reply<GameSnapshot>,
    },
    SeatView {
        seat: Seat,
        reply: Reply<SeatView>,
    },
    Shutdown,
}

/// Cheap, cloneable handle to a running table.
#[derive(Clone)]
pub struct TableHandle {
    id: Uuid,
    commands: mpsc::Sender<Command>,
    events: broadcast::Sender<TableEvent>,
}

impl TableHandle {
    /// Spawn the table task. Must be called inside a tokio runtime.
    ///
    /// The game does not begin until [`start`](Self::start), so callers can
    /// subscribe first and see every event.
    pub fn spawn(options: TableOptions) -> Result<Self, AppError> {
        let game_seed = options
            .seed
            .map(game_seed_from_u64)
            .unwrap_or_else(random_game_seed);
        let flow_options = FlowOptions {
            starting_dealer: options.starting_dealer,
            ..FlowOptions::from_config(&options.config)
        };
        let flow = GameFlow::new(options.seats.clone(), game_seed, flow_options)?;

        let mut ais: SeatAis = Default::default();
        for (seat, cfg) in options.seats.iter().enumerate() {
            if cfg.kind != SeatKind::Ai {
                continue;
            }
            let config = json!({ "seed": flow.ai_seed(seat as Seat) });
            let ai = create_ai(&options.ai_type, Some(&config)).ok_or_else(|| {
                AppError::config(format!("unknown AI type {:?}", options.ai_type))
            })?;
            ais[seat] = Some(ai);
        }

        Ok(Self::launch(flow, ais, &options.config))
    }

    fn launch(flow: GameFlow, ais: SeatAis, config: &EngineConfig) -> Self {
        let id = Uuid::new_v4();
        let (commands, rx) = mpsc::channel(config.command_buffer);
        let (events, _) = broadcast::channel(config.event_buffer);

        let actor = TableActor {
            id,
            flow,
            ais,
            think_time: config.ai_think_time,
            events: events.clone(),
            seq: 0,
            stalled: false,
        };
        tokio::spawn(actor.run(rx));
        info!(table_id = %id, "table spawned");

        Self {
            id,
            commands,
            events,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Receivers more than `event_buffer` events behind get
    /// `RecvError::Lagged`; resync from [`snapshot`](Self::snapshot).
    pub fn subscribe(&self) -> broadcast::Receiver<TableEvent> {
        self.events.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    pub async fn start(&self) -> Result<Vec<GameEvent>, AppError> {
        self.request(|reply| Command::Start { reply }).await
    }

    /// Submit an action for `seat`. The reply carries this action's events
    /// only; automated seats move afterwards and show up on the broadcast.
    pub async fn act(&self, seat: Seat, action: PlayerAction) -> Result<Vec<GameEvent>, AppError> {
        self.request(|reply| Command::Act {
            seat,
            action,
            reply,
        })
        .await
    }

    /// Abandon the current round and redeal. Handled between automated
    /// moves, so it also works on a table with no human seat.
    pub async fn abort_round(&self) -> Result<Vec<GameEvent>, AppError> {
        self.request(|reply| Command::AbortRound { reply }).await
    }

    pub async fn snapshot(&self) -> Result<GameSnapshot, AppError> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    pub async fn seat_view(&self, seat: Seat) -> Result<SeatView, AppError> {
        self.request(|reply| Command::SeatView { seat, reply }).await
    }

    /// Ask the table to stop. Pending commands already queued are dropped.
    pub async fn shutdown(&self) {
        if self.commands.send(Command::Shutdown).await.is_err() {
            debug!(table_id = %self.id, "shutdown sent to a closed table");
        }
    }

    async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> Command) -> Result<T, AppError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| AppError::table_closed(self.id.to_string()))?;
        rx.await
            .map_err(|_| AppError::table_closed(self.id.to_string()))?
    }
}

struct TableActor {
    id: Uuid,
    flow: GameFlow,
    ais: SeatAis,
    think_time: Duration,
    events: broadcast::Sender<TableEvent>,
    seq: u64,
    /// Set when an automated seat failed; cleared by the next accepted
    /// mutation (normally an abort).
    stalled: bool,
}

impl TableActor {
    /// One automated move per iteration, with queued commands taking
    /// priority over the next move.
    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        loop {
            let command = if self.ai_to_move() {
                tokio::select! {
                    biased;
                    command = rx.recv() => command,
                    () = pace(self.think_time) => {
                        self.step_ai();
                        continue;
                    }
                }
            } else {
                rx.recv().await
            };
            let Some(command) = command else {
                break;
            };
            if !self.handle(command) {
                break;
            }
        }
        info!(table_id = %self.id, "table stopped");
    }

    /// Returns false when the table should stop.
    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Start { reply } => {
                let result = self.flow.start();
                self.after_mutation(None, result, reply);
            }
            Command::Act {
                seat,
                action,
                reply,
            } => {
                let result = self.flow.apply(seat, action);
                self.after_mutation(Some(seat), result, reply);
            }
            Command::AbortRound { reply } => {
                let result = self.flow.abort_round();
                self.after_mutation(None, result, reply);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(Ok(self.flow.snapshot()));
            }
            Command::SeatView { seat, reply } => {
                let _ = reply.send(self.flow.seat_view(seat));
            }
            Command::Shutdown => return false,
        }
        true
    }

    fn ai_to_move(&self) -> bool {
        if self.stalled {
            return false;
        }
        matches!(
            self.flow.pending_action(),
            Some((seat, _)) if self.ais[seat as usize].is_some()
        )
    }

    /// Publish a successful mutation, then reply.
    fn after_mutation(
        &mut self,
        seat: Option<Seat>,
        result: Result<Vec<GameEvent>, AppError>,
        reply: Reply<Vec<GameEvent>>,
    ) {
        match &result {
            Ok(events) => {
                self.stalled = false;
                self.publish(events);
            }
            Err(AppError::Rejected(err)) => {
                if let Some(kind) = err.kind() {
                    debug!(
                        table_id = %self.id,
                        seat,
                        family = kind.family().as_str(),
                        code = kind.code().as_str(),
                        "action rejected"
                    );
                }
            }
            Err(err) => warn!(table_id = %self.id, error = %err, "table command failed"),
        }
        let _ = reply.send(result);
    }

    fn step_ai(&mut self) {
        let Some((seat, _)) = self.flow.pending_action() else {
            return;
        };
        match self.flow.step_ai(&self.ais) {
            Ok(Some(events)) => self.publish(&events),
            Ok(None) => {}
            Err(err) => {
                error!(table_id = %self.id, seat, error = %err, "automated seat failed");
                self.stalled = true;
                self.publish(&[GameEvent::AiFailed {
                    seat,
                    code: err.code().as_str().to_string(),
                    detail: err.to_string(),
                }]);
            }
        }
    }

    fn publish(&mut self, events: &[GameEvent]) {
        for event in events {
            self.seq += 1;
            if let GameEvent::GameEnded { outcome, .. } = event {
                info!(table_id = %self.id, ?outcome, "game over");
            }
            // Nobody listening is not an error.
            let _ = self.events.send(TableEvent {
                table_id: self.id,
                seq: self.seq,
                event: event.clone(),
            });
        }
    }
}

async fn pace(think_time: Duration) {
    if think_time.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(think_time).await;
    }
}
