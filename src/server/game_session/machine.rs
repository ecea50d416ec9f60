//! The per-session protocol state machine.
//!
//! A [`Session`] pairs two connections, deals roles, validates moves and
//! decides the outcome. It is the only thing that mutates its board and turn
//! pointer. Every handler returns a [`Reaction`]: the sends it issued, still
//! in flight. The caller decides whether to wait on it; failures inside it
//! go to the session's [`ErrorSink`] and never roll back state.

use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::game::PLAYERS_IN_SESSION;
use crate::game::board::Board;
use crate::game::types::Role;
use crate::server::connection::{Connection, ErrorSink};
use crate::server::error::MoveError;
use crate::server::protocol::{self, ClientMessage, Frame, PlayerMove, ServerMessage};

/// Outstanding sends of one reaction.
pub type Reaction = LocalBoxFuture<'static, ()>;

/// Index of a player slot inside a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    fn role(self) -> Role {
        match self {
            Seat::First => Role::X,
            Seat::Second => Role::O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dealing,
    Active,
    Finished,
    Destroyed,
}

/// Binds a connection to its role. Neither can change after construction.
pub struct PlayerSlot<C> {
    connection: C,
    role: Role,
}

impl<C> PlayerSlot<C> {
    pub fn connection(&self) -> &C {
        &self.connection
    }

    #[cfg(test)]
    pub fn role(&self) -> Role {
        self.role
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveOutcome {
    Continue,
    Won(Seat),
    Draw,
}

pub struct Session<C: Connection> {
    id: Uuid,
    slots: [PlayerSlot<C>; PLAYERS_IN_SESSION],
    board: Board,
    turn: Seat,
    phase: Phase,
    sink: Rc<dyn ErrorSink>,
}

impl<C: Connection> Session<C> {
    /// `first` plays `x` and moves first; `second` plays `o`.
    pub fn new(id: Uuid, first: C, second: C, sink: Rc<dyn ErrorSink>) -> Self {
        let slot = |connection, seat: Seat| PlayerSlot {
            connection,
            role: seat.role(),
        };
        Self {
            id,
            slots: [slot(first, Seat::First), slot(second, Seat::Second)],
            board: Board::new(),
            turn: Seat::First,
            phase: Phase::Dealing,
            sink,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn turn_holder(&self) -> Seat {
        self.turn
    }

    pub fn slot(&self, seat: Seat) -> &PlayerSlot<C> {
        &self.slots[seat.index()]
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == Phase::Destroyed
    }

    pub fn is_open(&self, seat: Seat) -> bool {
        self.slot(seat).connection.is_open()
    }

    /// Clear the board, give the turn back to the first seat and send both
    /// players `gameStarted`. Used for the initial deal and for restarts.
    pub fn deal(&mut self) -> Reaction {
        if self.is_destroyed() {
            return none();
        }
        self.phase = Phase::Dealing;
        self.board.reset();
        self.turn = Seat::First;
        let outgoing = Seat::ALL
            .iter()
            .map(|&seat| {
                let message = ServerMessage::GameStarted {
                    my_turn: seat == self.turn,
                    game_field: self.board.clone(),
                    role: self.slot(seat).role,
                };
                (seat, message)
            })
            .collect();
        self.phase = Phase::Active;
        info!("[GameSession {}] Round started", self.id);
        self.dispatch(outgoing)
    }

    /// Decode a raw frame from `from` and process it.
    pub fn handle_frame(&mut self, from: Seat, frame: &Frame) -> Reaction {
        let message = protocol::decode(frame);
        self.handle_message(from, message)
    }

    pub fn handle_message(&mut self, from: Seat, message: ClientMessage) -> Reaction {
        if self.is_destroyed() {
            debug!("[GameSession {}] Ignoring message after teardown", self.id);
            return none();
        }
        match message {
            ClientMessage::PlayerMove { player_move } => match self.apply_move(from, &player_move) {
                Ok(outcome) => self.announce(outcome),
                Err(e) => {
                    debug!("[GameSession {}] Rejected move from {:?}: {}", self.id, from, e);
                    self.reply(from, ServerMessage::incorrect_request(e.to_string()))
                }
            },
            ClientMessage::RepeatGame => {
                info!("[GameSession {}] Restart requested by {:?}", self.id, from);
                self.deal()
            }
            ClientMessage::IncorrectRequest { message } => {
                debug!("[GameSession {}] Incorrect request from {:?}: {}", self.id, from, message);
                self.reply(from, ServerMessage::IncorrectRequest { message })
            }
            ClientMessage::IncorrectResponse { message } => {
                warn!(
                    "[GameSession {}] Client {:?} reported an incorrect response: {}",
                    self.id, from, message
                );
                none()
            }
        }
    }

    /// The connection at `seat` went away. Tells the survivor and closes it.
    /// Only the first call has any effect.
    pub fn handle_closed(&mut self, seat: Seat) -> Reaction {
        if self.is_destroyed() {
            debug!("[GameSession {}] Close of {:?} after teardown ignored", self.id, seat);
            return none();
        }
        self.phase = Phase::Destroyed;
        info!("[GameSession {}] {:?} disconnected, tearing down", self.id, seat);

        let survivor = seat.other();
        if !self.is_open(survivor) {
            return none();
        }
        let reaction = self.reply(survivor, ServerMessage::GameAborted);
        self.slot(survivor).connection.close();
        reaction
    }

    fn apply_move(&mut self, from: Seat, player_move: &PlayerMove) -> Result<MoveOutcome, MoveError> {
        match self.phase {
            Phase::Active => {}
            Phase::Finished => return Err(MoveError::GameFinished),
            Phase::Dealing | Phase::Destroyed => return Err(MoveError::NotYourTurn),
        }
        if from != self.turn {
            return Err(MoveError::NotYourTurn);
        }
        let position = player_move
            .position
            .to_position()
            .ok_or(MoveError::OutOfField)?;
        if !self.board.is_empty_at(position) {
            return Err(MoveError::CellOccupied);
        }

        let role = self.slot(from).role;
        if player_move.role.is_some_and(|claimed| claimed != role) {
            debug!(
                "[GameSession {}] {:?} claimed role {:?} but plays {:?}",
                self.id, from, player_move.role, role
            );
        }
        self.board.place(position, role);

        if self.board.has_won(role) {
            self.phase = Phase::Finished;
            Ok(MoveOutcome::Won(from))
        } else if self.board.is_full() {
            self.phase = Phase::Finished;
            Ok(MoveOutcome::Draw)
        } else {
            self.turn = self.turn.other();
            Ok(MoveOutcome::Continue)
        }
    }

    fn announce(&self, outcome: MoveOutcome) -> Reaction {
        let outgoing = match outcome {
            MoveOutcome::Continue => Seat::ALL
                .iter()
                .map(|&seat| {
                    let message = ServerMessage::ChangePlayer {
                        my_turn: seat == self.turn,
                        game_field: self.board.clone(),
                        role: self.slot(seat).role,
                    };
                    (seat, message)
                })
                .collect(),
            MoveOutcome::Won(winner) => {
                info!("[GameSession {}] {:?} won", self.id, winner);
                Seat::ALL
                    .iter()
                    .map(|&seat| {
                        debug_assert_eq!(
                            self.board.has_won(self.slot(seat).role),
                            seat == winner,
                            "exactly one role may hold a winning line"
                        );
                        (seat, ServerMessage::GameResult { win: seat == winner })
                    })
                    .collect()
            }
            MoveOutcome::Draw => {
                info!("[GameSession {}] Draw", self.id);
                Seat::ALL
                    .iter()
                    .map(|&seat| (seat, ServerMessage::GameResult { win: false }))
                    .collect()
            }
        };
        self.dispatch(outgoing)
    }

    fn reply(&self, to: Seat, message: ServerMessage) -> Reaction {
        self.dispatch(vec![(to, message)])
    }

    /// Issue every send now and return a future that reports failures.
    fn dispatch(&self, outgoing: Vec<(Seat, ServerMessage)>) -> Reaction {
        let sends: Vec<_> = outgoing
            .into_iter()
            .map(|(seat, message)| {
                let connection = &self.slot(seat).connection;
                let connection_id = connection.id();
                let pending = connection.send(message.clone());
                let sink = Rc::clone(&self.sink);
                async move {
                    if let Err(e) = pending.await {
                        sink.report(connection_id, &message, &e);
                    }
                }
            })
            .collect();
        future::join_all(sends).map(|_| ()).boxed_local()
    }
}

fn none() -> Reaction {
    future::ready(()).boxed_local()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::game::types::{CellState, Position};
    use crate::server::error::ConnectionError;
    use crate::server::connection::SendFuture;
    use crate::server::protocol::CellPosition;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Event {
        Sent(ServerMessage),
        Closed,
    }

    /// Records everything the session does to it, in order.
    #[derive(Clone)]
    pub struct MockConnection {
        id: Uuid,
        events: Rc<RefCell<Vec<Event>>>,
        open: Rc<Cell<bool>>,
        failing: Rc<Cell<bool>>,
        dropping: Rc<Cell<bool>>,
    }

    impl MockConnection {
        pub fn new() -> Self {
            Self {
                id: Uuid::new_v4(),
                events: Rc::new(RefCell::new(Vec::new())),
                open: Rc::new(Cell::new(true)),
                failing: Rc::new(Cell::new(false)),
                dropping: Rc::new(Cell::new(false)),
            }
        }

        pub fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        pub fn sent(&self) -> Vec<ServerMessage> {
            self.events
                .borrow()
                .iter()
                .filter_map(|e| match e {
                    Event::Sent(m) => Some(m.clone()),
                    Event::Closed => None,
                })
                .collect()
        }

        pub fn last(&self) -> Option<ServerMessage> {
            self.sent().last().cloned()
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }

        pub fn set_open(&self, open: bool) {
            self.open.set(open);
        }

        pub fn fail_sends(&self) {
            self.failing.set(true);
        }

        /// The peer goes away while the next send is in flight: the
        /// connection still reads as open until that send is polled.
        pub fn drop_on_send(&self) {
            self.dropping.set(true);
        }
    }

    impl Connection for MockConnection {
        fn id(&self) -> Uuid {
            self.id
        }

        fn send(&self, message: ServerMessage) -> SendFuture {
            self.events.borrow_mut().push(Event::Sent(message));
            if self.dropping.get() {
                let open = self.open.clone();
                return async move {
                    open.set(false);
                    Err(ConnectionError::Closed)
                }
                .boxed_local();
            }
            let result = if self.failing.get() {
                Err(ConnectionError::Closed)
            } else {
                Ok(())
            };
            future::ready(result).boxed_local()
        }

        fn close(&self) {
            self.events.borrow_mut().push(Event::Closed);
            self.open.set(false);
        }

        fn is_open(&self) -> bool {
            self.open.get()
        }
    }

    #[derive(Default)]
    pub struct RecordingSink {
        pub reports: RefCell<Vec<(Uuid, String)>>,
    }

    impl ErrorSink for RecordingSink {
        fn report(&self, connection: Uuid, _message: &ServerMessage, error: &ConnectionError) {
            self.reports.borrow_mut().push((connection, error.to_string()));
        }
    }

    struct Fixture {
        session: Session<MockConnection>,
        a: MockConnection,
        b: MockConnection,
        sink: Rc<RecordingSink>,
    }

    /// A dealt session with both logs cleared.
    fn fixture() -> Fixture {
        let a = MockConnection::new();
        let b = MockConnection::new();
        let sink = Rc::new(RecordingSink::default());
        let mut session = Session::new(Uuid::new_v4(), a.clone(), b.clone(), sink.clone());
        block_on(session.deal());
        a.clear();
        b.clear();
        Fixture { session, a, b, sink }
    }

    fn mv(row: i64, col: i64) -> ClientMessage {
        ClientMessage::PlayerMove {
            player_move: PlayerMove {
                role: None,
                position: CellPosition::new(row, col),
            },
        }
    }

    fn play(f: &mut Fixture, seat: Seat, row: i64, col: i64) {
        block_on(f.session.handle_message(seat, mv(row, col)));
    }

    fn rejected_with(message: Option<ServerMessage>, text: &str) -> bool {
        message == Some(ServerMessage::incorrect_request(text))
    }

    #[test]
    fn test_deal_sends_start_to_both() {
        let a = MockConnection::new();
        let b = MockConnection::new();
        let sink = Rc::new(RecordingSink::default());
        let mut session = Session::new(Uuid::new_v4(), a.clone(), b.clone(), sink.clone());
        assert_eq!(session.phase(), Phase::Dealing);

        block_on(session.deal());

        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.turn_holder(), Seat::First);
        assert_eq!(
            a.sent(),
            vec![ServerMessage::GameStarted {
                my_turn: true,
                game_field: Board::new(),
                role: Role::X
            }]
        );
        assert_eq!(
            b.sent(),
            vec![ServerMessage::GameStarted {
                my_turn: false,
                game_field: Board::new(),
                role: Role::O
            }]
        );
        assert!(sink.reports.borrow().is_empty());
    }

    #[test]
    fn test_valid_move_flips_turn_and_notifies_both() {
        let mut f = fixture();
        play(&mut f, Seat::First, 1, 1);

        assert_eq!(f.session.turn_holder(), Seat::Second);
        assert_eq!(f.session.board().cell(Position::new(1, 1).unwrap()), CellState::X);

        let (Some(ServerMessage::ChangePlayer { my_turn: a_turn, game_field: a_field, role: a_role }),
             Some(ServerMessage::ChangePlayer { my_turn: b_turn, game_field: b_field, role: b_role })) =
            (f.a.last(), f.b.last())
        else {
            panic!("both players should receive changePlayer");
        };
        assert!(!a_turn);
        assert!(b_turn);
        assert_eq!(a_field, b_field);
        assert_eq!(&a_field, f.session.board());
        assert_eq!(a_role, Role::X);
        assert_eq!(b_role, Role::O);
    }

    #[test]
    fn test_move_out_of_turn_is_rejected_to_sender_only() {
        let mut f = fixture();
        play(&mut f, Seat::Second, 0, 0);

        assert!(rejected_with(f.b.last(), "Not your turn"));
        assert!(f.a.sent().is_empty());
        assert_eq!(f.session.board(), &Board::new());
        assert_eq!(f.session.turn_holder(), Seat::First);
    }

    #[test]
    fn test_move_out_of_field_is_rejected() {
        let mut f = fixture();
        for (row, col) in [(3, 0), (0, 3), (-1, 0), (0, -1), (100, 100)] {
            play(&mut f, Seat::First, row, col);
            assert!(rejected_with(f.a.last(), "Out of field"), "({}, {})", row, col);
        }
        assert_eq!(f.session.board(), &Board::new());
        assert_eq!(f.session.turn_holder(), Seat::First);
        assert!(f.b.sent().is_empty());
    }

    #[test]
    fn test_fractional_or_huge_coordinates_are_out_of_field() {
        let mut f = fixture();
        for position in [
            r#"{"row":5.0,"col":0}"#,
            r#"{"row":1.5,"col":1}"#,
            r#"{"row":99999999999999999999,"col":1}"#,
        ] {
            let frame = Frame::Text(format!(
                r#"{{"type":"playerMove","move":{{"position":{}}}}}"#,
                position
            ));
            block_on(f.session.handle_frame(Seat::First, &frame));
            assert!(rejected_with(f.a.last(), "Out of field"), "{}", position);
        }
        assert_eq!(f.session.board(), &Board::new());
        assert_eq!(f.session.turn_holder(), Seat::First);

        // an integral float still lands on the board
        let frame = Frame::Text(r#"{"type":"playerMove","move":{"position":{"row":2.0,"col":0}}}"#.into());
        block_on(f.session.handle_frame(Seat::First, &frame));
        assert_eq!(f.session.board().cell(Position::new(2, 0).unwrap()), CellState::X);
        assert_eq!(f.session.turn_holder(), Seat::Second);
    }

    #[test]
    fn test_move_on_occupied_cell_is_rejected() {
        let mut f = fixture();
        play(&mut f, Seat::First, 1, 1);
        let before = f.session.board().clone();
        f.a.clear();
        f.b.clear();

        play(&mut f, Seat::Second, 1, 1);

        assert!(rejected_with(f.b.last(), "Cell is occupied"));
        assert!(f.a.sent().is_empty());
        assert_eq!(f.session.board(), &before);
        assert_eq!(f.session.turn_holder(), Seat::Second);
    }

    #[test]
    fn test_row_win_ends_round() {
        let mut f = fixture();
        play(&mut f, Seat::First, 0, 0);
        play(&mut f, Seat::Second, 1, 0);
        play(&mut f, Seat::First, 0, 1);
        play(&mut f, Seat::Second, 1, 1);
        play(&mut f, Seat::First, 0, 2);

        assert_eq!(f.session.phase(), Phase::Finished);
        assert_eq!(f.a.last(), Some(ServerMessage::GameResult { win: true }));
        assert_eq!(f.b.last(), Some(ServerMessage::GameResult { win: false }));
        assert!(f.session.board().has_won(Role::X));
        assert!(!f.session.board().has_won(Role::O));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut f = fixture();
        let moves = [
            (Seat::First, 0, 0),
            (Seat::Second, 0, 1),
            (Seat::First, 0, 2),
            (Seat::Second, 1, 1),
            (Seat::First, 1, 0),
            (Seat::Second, 1, 2),
            (Seat::First, 2, 1),
            (Seat::Second, 2, 0),
            (Seat::First, 2, 2),
        ];
        for (seat, row, col) in moves {
            play(&mut f, seat, row, col);
        }

        assert!(f.session.board().is_full());
        assert_eq!(f.session.phase(), Phase::Finished);
        assert_eq!(f.a.last(), Some(ServerMessage::GameResult { win: false }));
        assert_eq!(f.b.last(), Some(ServerMessage::GameResult { win: false }));
    }

    #[test]
    fn test_finished_round_only_accepts_restart() {
        let mut f = fixture();
        for (seat, row, col) in [
            (Seat::First, 0, 0),
            (Seat::Second, 1, 0),
            (Seat::First, 0, 1),
            (Seat::Second, 1, 1),
            (Seat::First, 0, 2),
        ] {
            play(&mut f, seat, row, col);
        }
        let finished = f.session.board().clone();

        play(&mut f, Seat::Second, 2, 2);
        assert!(rejected_with(f.b.last(), "Game is finished"));
        assert_eq!(f.session.board(), &finished);

        f.a.clear();
        f.b.clear();
        block_on(f.session.handle_message(Seat::Second, ClientMessage::RepeatGame));

        assert_eq!(f.session.phase(), Phase::Active);
        assert_eq!(f.session.board(), &Board::new());
        assert_eq!(f.session.turn_holder(), Seat::First);
        assert!(matches!(f.a.last(), Some(ServerMessage::GameStarted { my_turn: true, role: Role::X, .. })));
        assert!(matches!(f.b.last(), Some(ServerMessage::GameStarted { my_turn: false, role: Role::O, .. })));
    }

    #[test]
    fn test_restart_mid_round_resets_board_and_turn() {
        let mut f = fixture();
        play(&mut f, Seat::First, 2, 2);
        play(&mut f, Seat::Second, 0, 0);
        play(&mut f, Seat::First, 1, 2);
        f.a.clear();
        f.b.clear();

        block_on(f.session.handle_message(Seat::First, ClientMessage::RepeatGame));

        assert_eq!(f.session.board(), &Board::new());
        assert_eq!(f.session.turn_holder(), Seat::First);
        assert_eq!(f.a.sent().len(), 1);
        assert_eq!(f.b.sent().len(), 1);
        // roles survive restarts
        assert_eq!(f.session.slot(Seat::First).role(), Role::X);
        assert_eq!(f.session.slot(Seat::Second).role(), Role::O);
    }

    #[test]
    fn test_malformed_frame_gets_incorrect_request() {
        let mut f = fixture();
        block_on(f.session.handle_frame(Seat::Second, &Frame::Text("{oops".into())));
        match f.b.last() {
            Some(ServerMessage::IncorrectRequest { message }) => {
                assert!(message.starts_with("Can't parse JSON data"))
            }
            other => panic!("unexpected {:?}", other),
        }
        block_on(f.session.handle_frame(Seat::First, &Frame::Binary(vec![0])));
        assert!(rejected_with(f.a.last(), "Wrong data type"));
        assert_eq!(f.session.phase(), Phase::Active);
        assert_eq!(f.session.turn_holder(), Seat::First);
    }

    #[test]
    fn test_unknown_type_names_the_type() {
        let mut f = fixture();
        block_on(f.session.handle_frame(Seat::First, &Frame::Text(r#"{"type":"resign"}"#.into())));
        assert!(rejected_with(f.a.last(), r#"Unknown message type: "resign""#));
        assert!(f.b.sent().is_empty());
    }

    #[test]
    fn test_client_diagnostics() {
        let mut f = fixture();
        block_on(f.session.handle_message(
            Seat::First,
            ClientMessage::IncorrectRequest { message: "bad click".into() },
        ));
        assert!(rejected_with(f.a.last(), "bad click"));

        block_on(f.session.handle_message(
            Seat::Second,
            ClientMessage::IncorrectResponse { message: "weird board".into() },
        ));
        assert!(f.b.sent().is_empty());
    }

    #[test]
    fn test_close_aborts_and_closes_survivor_once() {
        let mut f = fixture();
        f.a.set_open(false);

        block_on(f.session.handle_closed(Seat::First));

        assert_eq!(f.session.phase(), Phase::Destroyed);
        assert_eq!(f.b.events(), vec![Event::Sent(ServerMessage::GameAborted), Event::Closed]);
        assert!(f.a.events().is_empty());

        // the survivor's own close event arrives afterwards
        block_on(f.session.handle_closed(Seat::Second));
        block_on(f.session.handle_closed(Seat::First));
        assert_eq!(f.b.events().len(), 2);
        assert!(f.a.events().is_empty());
    }

    #[test]
    fn test_no_processing_after_teardown() {
        let mut f = fixture();
        f.b.set_open(false);
        block_on(f.session.handle_closed(Seat::Second));
        f.a.clear();

        play(&mut f, Seat::First, 0, 0);
        block_on(f.session.handle_message(Seat::First, ClientMessage::RepeatGame));
        block_on(f.session.deal());

        assert!(f.a.events().is_empty());
        assert_eq!(f.session.board(), &Board::new());
        assert_eq!(f.session.phase(), Phase::Destroyed);
    }

    #[test]
    fn test_send_failure_is_reported_and_state_kept() {
        let mut f = fixture();
        f.b.fail_sends();

        play(&mut f, Seat::First, 0, 0);

        assert_eq!(f.session.turn_holder(), Seat::Second);
        assert_eq!(f.session.board().occupied_count(), 1);
        let reports = f.sink.reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, f.b.id());
        assert_eq!(reports[0].1, "connection is closed");
    }

    #[test]
    fn test_alternating_play_never_overwrites() {
        // rejected overwrite attempts interleaved with a full legal game
        let mut f = fixture();
        let order = [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0), (1, 0), (1, 2), (2, 1), (0, 1)];
        let mut seat = Seat::First;
        for (i, &(row, col)) in order.iter().enumerate() {
            if f.session.phase() != Phase::Active {
                break;
            }
            if i > 0 {
                let (prev_row, prev_col) = order[i - 1];
                let before = f.session.board().clone();
                play(&mut f, seat, prev_row, prev_col);
                assert_eq!(f.session.board(), &before);
            }
            play(&mut f, seat, row, col);
            seat = seat.other();
        }
        assert_eq!(f.session.phase(), Phase::Finished);
    }
}
