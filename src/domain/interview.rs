//! Finite-state interview that collects an [`EnsembleRequest`] one answer
//! at a time.
//!
//! The sequence itself is platform-independent: a driver presents the
//! current [`Question`], feeds the [`Reply`] back in, and follows the
//! returned [`InterviewStep`]. Timeouts and cancellation arrive as explicit
//! reply events rather than driver-side special cases, so every front end
//! shares the same retry and abort behavior.

use std::fmt;
use std::mem;

use crate::domain::parse::parse_comma_list;
use crate::domain::request::{EnsembleRequest, Musician};

/// Answer ending the current-musician pair loop.
pub const DONE_SENTINEL: &str = "done";
/// Answer leaving an optional list empty.
pub const SKIP_SENTINEL: &str = "skip";
/// Answer substituting the requester's own name as ensemble lead.
pub const USE_MINE_SENTINEL: &str = "use mine";

/// Answer slots the interview walks through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    SongTitle,
    Game,
    MusiciansNeeded,
    MusicianPart,
    MusicianName,
    OriginalTrack,
    OtherTracks,
    UserId,
    ThumbnailUrl,
}

impl FieldName {
    /// Snake-case key used in abort reasons and logs.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::SongTitle => "song_title",
            FieldName::Game => "game",
            FieldName::MusiciansNeeded => "musicians_needed",
            FieldName::MusicianPart => "musician_part",
            FieldName::MusicianName => "musician_name",
            FieldName::OriginalTrack => "original_track",
            FieldName::OtherTracks => "other_tracks",
            FieldName::UserId => "user_id",
            FieldName::ThumbnailUrl => "thumbnail_url",
        }
    }

    /// Prompt label shown to the requester.
    pub fn prompt(self) -> &'static str {
        match self {
            FieldName::SongTitle => "Song name",
            FieldName::Game => "Game name",
            FieldName::MusiciansNeeded => "Musicians needed (comma-separated, or 'skip')",
            FieldName::MusicianPart => "Current musician part (or 'done' to finish)",
            FieldName::MusicianName => "Current musician name",
            FieldName::OriginalTrack => "Original track link(s)",
            FieldName::OtherTracks => "Extra track links (comma-separated, or 'skip')",
            FieldName::UserId => "Ensemble lead (or 'use mine', blank for the placeholder)",
            FieldName::ThumbnailUrl => "Thumbnail URL (blank for the default)",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One question to put to the requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub field: FieldName,
    /// Set when the previous answer for this field was rejected.
    pub note: Option<String>,
}

impl Question {
    fn fresh(field: FieldName) -> Self {
        Self { field, note: None }
    }

    fn rejected(field: FieldName, note: String) -> Self {
        Self { field, note: Some(note) }
    }
}

/// Reply event fed back into the interview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answer(String),
    /// The driver waited too long for an answer.
    Timeout,
    /// The requester backed out of the flow.
    Cancelled,
}

/// Why an interview ended without a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    Timeout { field: FieldName },
    Cancelled,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Timeout { field } => write!(f, "timed out waiting for {field}"),
            AbortReason::Cancelled => f.write_str("cancelled by requester"),
        }
    }
}

/// Outcome of feeding one reply into the interview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewStep {
    /// Ask this next.
    Question(Question),
    /// Every slot is filled; the collected request.
    Finished(Box<EnsembleRequest>),
    /// The flow ended early.
    Aborted(AbortReason),
}

#[derive(Debug, Clone)]
enum State {
    Awaiting(FieldName),
    /// Collecting the performer for a part already named.
    AwaitingName { part: String },
    Finished,
    Aborted(AbortReason),
}

#[derive(Debug, Clone, Default)]
struct Draft {
    song_title: Option<String>,
    game: Option<String>,
    musicians_needed: Vec<String>,
    current_musicians: Vec<Musician>,
    original_track: Option<String>,
    other_tracks: Vec<String>,
    user_id: Option<String>,
    thumbnail_url: Option<String>,
}

impl Draft {
    fn build(&self) -> EnsembleRequest {
        EnsembleRequest {
            song_title: self.song_title.clone().unwrap_or_default(),
            game: self.game.clone().unwrap_or_default(),
            musicians_needed: self.musicians_needed.clone(),
            current_musicians: self.current_musicians.clone(),
            original_track: self.original_track.clone().unwrap_or_default(),
            other_tracks: self.other_tracks.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

/// The interview state machine. Construct one, present [`Interview::opening`],
/// then alternate asking and [`Interview::advance`] until a terminal step.
#[derive(Debug)]
pub struct Interview {
    state: State,
    draft: Draft,
    requester: Option<String>,
}

impl Interview {
    /// Start a fresh interview. `requester` is the display name substituted
    /// for the `use mine` sentinel when known.
    pub fn new(requester: Option<String>) -> Self {
        Self {
            state: State::Awaiting(FieldName::SongTitle),
            draft: Draft::default(),
            requester,
        }
    }

    /// The step to present before any reply has been fed in.
    pub fn opening(&self) -> InterviewStep {
        match &self.state {
            State::Awaiting(field) => InterviewStep::Question(Question::fresh(*field)),
            State::AwaitingName { .. } => {
                InterviewStep::Question(Question::fresh(FieldName::MusicianName))
            }
            State::Finished => InterviewStep::Finished(Box::new(self.draft.build())),
            State::Aborted(reason) => InterviewStep::Aborted(reason.clone()),
        }
    }

    /// Whether the interview has reached `Finished` or `Aborted`.
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, State::Finished | State::Aborted(_))
    }

    /// Feed one reply and get the next step.
    ///
    /// A rejected answer re-asks the same field with a note attached, an
    /// empty optional answer falls through to its default, and terminal
    /// states are idempotent: further replies return the same step.
    pub fn advance(&mut self, reply: Reply) -> InterviewStep {
        let previous = mem::replace(&mut self.state, State::Finished);

        let field = match &previous {
            State::Awaiting(field) => *field,
            State::AwaitingName { .. } => FieldName::MusicianName,
            State::Finished => return self.finish(),
            State::Aborted(reason) => {
                let reason = reason.clone();
                return self.abort(reason);
            }
        };

        let text = match reply {
            Reply::Answer(text) => text,
            Reply::Timeout => return self.abort(AbortReason::Timeout { field }),
            Reply::Cancelled => return self.abort(AbortReason::Cancelled),
        };
        let answer = text.trim();

        match previous {
            State::Awaiting(FieldName::SongTitle) => {
                if answer.is_empty() {
                    return self.reject(FieldName::SongTitle, "Song name cannot be blank.");
                }
                self.draft.song_title = Some(answer.to_owned());
                self.goto(FieldName::Game)
            }
            State::Awaiting(FieldName::Game) => {
                if answer.is_empty() {
                    return self.reject(FieldName::Game, "Game name cannot be blank.");
                }
                self.draft.game = Some(answer.to_owned());
                self.goto(FieldName::MusiciansNeeded)
            }
            State::Awaiting(FieldName::MusiciansNeeded) => {
                if !answer.eq_ignore_ascii_case(SKIP_SENTINEL) {
                    self.draft.musicians_needed = parse_comma_list(answer);
                }
                self.goto(FieldName::MusicianPart)
            }
            State::Awaiting(FieldName::MusicianPart) => {
                if answer.is_empty() || answer.eq_ignore_ascii_case(DONE_SENTINEL) {
                    self.goto(FieldName::OriginalTrack)
                } else {
                    self.goto_name(answer.to_owned())
                }
            }
            State::AwaitingName { part } => {
                if answer.is_empty() {
                    let note = format!("A name is needed for '{part}'.");
                    return self.reject_name(part, note);
                }
                self.draft.current_musicians.push(Musician::new(part, answer));
                self.goto(FieldName::MusicianPart)
            }
            State::Awaiting(FieldName::OriginalTrack) => {
                if answer.is_empty() {
                    return self
                        .reject(FieldName::OriginalTrack, "An original track link is required.");
                }
                self.draft.original_track = Some(answer.to_owned());
                self.goto(FieldName::OtherTracks)
            }
            State::Awaiting(FieldName::OtherTracks) => {
                if !answer.eq_ignore_ascii_case(SKIP_SENTINEL) {
                    self.draft.other_tracks = parse_comma_list(answer);
                }
                self.goto(FieldName::UserId)
            }
            State::Awaiting(FieldName::UserId) => {
                if answer.eq_ignore_ascii_case(USE_MINE_SENTINEL) {
                    self.draft.user_id = self.requester.clone();
                } else if !answer.is_empty() {
                    self.draft.user_id = Some(answer.to_owned());
                }
                self.goto(FieldName::ThumbnailUrl)
            }
            State::Awaiting(FieldName::ThumbnailUrl) => {
                if !answer.is_empty() && !answer.eq_ignore_ascii_case(SKIP_SENTINEL) {
                    self.draft.thumbnail_url = Some(answer.to_owned());
                }
                self.finish()
            }
            State::Awaiting(FieldName::MusicianName) => {
                unreachable!("musician names are collected through AwaitingName")
            }
            State::Finished | State::Aborted(_) => unreachable!("terminal states return above"),
        }
    }

    fn goto(&mut self, field: FieldName) -> InterviewStep {
        self.state = State::Awaiting(field);
        InterviewStep::Question(Question::fresh(field))
    }

    fn goto_name(&mut self, part: String) -> InterviewStep {
        self.state = State::AwaitingName { part };
        InterviewStep::Question(Question::fresh(FieldName::MusicianName))
    }

    fn reject(&mut self, field: FieldName, note: &str) -> InterviewStep {
        self.state = State::Awaiting(field);
        InterviewStep::Question(Question::rejected(field, note.to_owned()))
    }

    fn reject_name(&mut self, part: String, note: String) -> InterviewStep {
        self.state = State::AwaitingName { part };
        InterviewStep::Question(Question::rejected(FieldName::MusicianName, note))
    }

    fn finish(&mut self) -> InterviewStep {
        self.state = State::Finished;
        InterviewStep::Finished(Box::new(self.draft.build()))
    }

    fn abort(&mut self, reason: AbortReason) -> InterviewStep {
        self.state = State::Aborted(reason.clone());
        InterviewStep::Aborted(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str) -> Reply {
        Reply::Answer(text.to_string())
    }

    fn expect_question(step: InterviewStep) -> Question {
        match step {
            InterviewStep::Question(question) => question,
            other => panic!("expected a question, got {other:?}"),
        }
    }

    fn expect_finished(step: InterviewStep) -> EnsembleRequest {
        match step {
            InterviewStep::Finished(request) => *request,
            other => panic!("expected a finished interview, got {other:?}"),
        }
    }

    #[test]
    fn opening_asks_for_the_song_title() {
        let interview = Interview::new(None);
        let question = expect_question(interview.opening());
        assert_eq!(question.field, FieldName::SongTitle);
        assert!(question.note.is_none());
    }

    #[test]
    fn walks_the_full_sequence() {
        let mut interview = Interview::new(None);
        let mut asked = vec![expect_question(interview.opening()).field];

        for reply in [
            "Corridors of Time",
            "Chrono Trigger",
            "violin, flute",
            "piano",
            "Alice",
            "done",
            "https://youtu.be/corridors",
            "skip",
            "lead_lena",
            "",
        ] {
            match interview.advance(answer(reply)) {
                InterviewStep::Question(question) => asked.push(question.field),
                InterviewStep::Finished(request) => {
                    assert_eq!(request.song_title, "Corridors of Time");
                    assert_eq!(request.musicians_needed, vec!["violin", "flute"]);
                    assert_eq!(request.current_musicians, vec![Musician::new("piano", "Alice")]);
                    assert_eq!(request.original_track, "https://youtu.be/corridors");
                    assert!(request.other_tracks.is_empty());
                    assert_eq!(request.user_id.as_deref(), Some("lead_lena"));
                    assert!(request.thumbnail_url.is_none());
                }
                InterviewStep::Aborted(reason) => panic!("unexpected abort: {reason}"),
            }
        }

        assert_eq!(
            asked,
            vec![
                FieldName::SongTitle,
                FieldName::Game,
                FieldName::MusiciansNeeded,
                FieldName::MusicianPart,
                FieldName::MusicianName,
                FieldName::MusicianPart,
                FieldName::OriginalTrack,
                FieldName::OtherTracks,
                FieldName::UserId,
                FieldName::ThumbnailUrl,
            ]
        );
        assert!(interview.is_terminal());
    }

    #[test]
    fn blank_required_answer_is_reasked_with_a_note() {
        let mut interview = Interview::new(None);
        let question = expect_question(interview.advance(answer("   ")));
        assert_eq!(question.field, FieldName::SongTitle);
        assert!(question.note.is_some());

        let question = expect_question(interview.advance(answer("Aria of the Soul")));
        assert_eq!(question.field, FieldName::Game);
        assert!(question.note.is_none());
    }

    #[test]
    fn pair_loop_collects_until_done() {
        let mut interview = Interview::new(None);
        interview.advance(answer("Song"));
        interview.advance(answer("Game"));
        interview.advance(answer("skip"));

        interview.advance(answer("piano"));
        interview.advance(answer("Alice"));
        interview.advance(answer("cello"));
        interview.advance(answer("Bob"));
        let question = expect_question(interview.advance(answer("DONE")));
        assert_eq!(question.field, FieldName::OriginalTrack);

        interview.advance(answer("url"));
        interview.advance(answer("skip"));
        interview.advance(answer(""));
        let request = expect_finished(interview.advance(answer("")));
        assert_eq!(
            request.current_musicians,
            vec![Musician::new("piano", "Alice"), Musician::new("cello", "Bob")]
        );
    }

    #[test]
    fn blank_part_ends_the_pair_loop() {
        let mut interview = Interview::new(None);
        interview.advance(answer("Song"));
        interview.advance(answer("Game"));
        interview.advance(answer("skip"));
        let question = expect_question(interview.advance(answer("")));
        assert_eq!(question.field, FieldName::OriginalTrack);
    }

    #[test]
    fn blank_musician_name_is_reasked_and_part_is_kept() {
        let mut interview = Interview::new(None);
        interview.advance(answer("Song"));
        interview.advance(answer("Game"));
        interview.advance(answer("skip"));
        interview.advance(answer("piano"));

        let question = expect_question(interview.advance(answer("")));
        assert_eq!(question.field, FieldName::MusicianName);
        assert!(question.note.as_deref().unwrap().contains("piano"));

        interview.advance(answer("Alice"));
        interview.advance(answer("done"));
        interview.advance(answer("url"));
        interview.advance(answer("skip"));
        interview.advance(answer(""));
        let request = expect_finished(interview.advance(answer("")));
        assert_eq!(request.current_musicians, vec![Musician::new("piano", "Alice")]);
    }

    #[test]
    fn use_mine_substitutes_the_requester() {
        let mut interview = Interview::new(Some("conductor_kat".to_string()));
        interview.advance(answer("Song"));
        interview.advance(answer("Game"));
        interview.advance(answer("skip"));
        interview.advance(answer("done"));
        interview.advance(answer("url"));
        interview.advance(answer("skip"));
        interview.advance(answer("Use Mine"));
        let request = expect_finished(interview.advance(answer("")));
        assert_eq!(request.user_id.as_deref(), Some("conductor_kat"));
    }

    #[test]
    fn blank_lead_and_thumbnail_fall_back_to_defaults() {
        let mut interview = Interview::new(None);
        interview.advance(answer("Song"));
        interview.advance(answer("Game"));
        interview.advance(answer("skip"));
        interview.advance(answer("done"));
        interview.advance(answer("url"));
        interview.advance(answer("skip"));
        interview.advance(answer(""));
        let request = expect_finished(interview.advance(answer("skip")));
        assert!(request.user_id.is_none());
        assert!(request.thumbnail_url.is_none());
    }

    #[test]
    fn timeout_names_the_outstanding_field() {
        let mut interview = Interview::new(None);
        interview.advance(answer("Song"));
        let step = interview.advance(Reply::Timeout);
        assert_eq!(
            step,
            InterviewStep::Aborted(AbortReason::Timeout { field: FieldName::Game })
        );
        assert!(interview.is_terminal());
    }

    #[test]
    fn cancel_aborts_immediately() {
        let mut interview = Interview::new(None);
        let step = interview.advance(Reply::Cancelled);
        assert_eq!(step, InterviewStep::Aborted(AbortReason::Cancelled));
    }

    #[test]
    fn terminal_states_are_idempotent() {
        let mut interview = Interview::new(None);
        interview.advance(Reply::Cancelled);
        let again = interview.advance(answer("ignored"));
        assert_eq!(again, InterviewStep::Aborted(AbortReason::Cancelled));

        let mut finished = Interview::new(None);
        finished.advance(answer("Song"));
        finished.advance(answer("Game"));
        finished.advance(answer("skip"));
        finished.advance(answer("done"));
        finished.advance(answer("url"));
        finished.advance(answer("skip"));
        finished.advance(answer(""));
        let first = expect_finished(finished.advance(answer("")));
        let second = expect_finished(finished.advance(answer("late reply")));
        assert_eq!(first, second);
    }
}
