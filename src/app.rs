//! Application state and core logic

use crate::config::TuiConfig;
use crate::relay::{ContactMessage, HttpRelayClient, RelayClient, RelayResponse};
use crate::state::forms::{Form, SubmissionState};
use crate::state::{AppState, MenuEntry, Notice, Section};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Fallback success banner when the relay reply carries no text
const SUCCESS_NOTICE: &str = "Message sent successfully! We'll get back to you soon.";
/// Generic retry banner; the user's input is preserved for the retry
const FAILURE_NOTICE: &str = "Failed to send message. Please try again.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Relay client for delivering contact form submissions
    relay: Arc<dyn RelayClient>,
    /// Completion channel of the in-flight send, if one is outstanding
    pending_send: Option<oneshot::Receiver<Result<RelayResponse>>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance wired to the configured relay
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let relay = HttpRelayClient::new(config.relay_url())?;
        Ok(Self::with_relay(Arc::new(relay)))
    }

    /// Create an App with an injected relay client
    pub fn with_relay(relay: Arc<dyn RelayClient>) -> Self {
        Self {
            state: AppState::default(),
            relay,
            pending_send: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-iteration housekeeping: settle the in-flight send, expire notices
    pub fn tick(&mut self) {
        self.poll_submission();
        self.expire_notice();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.contact_open {
            self.handle_contact_key(key);
        } else if self.state.menu_open {
            self.handle_menu_key(key);
        } else {
            self.handle_section_key(key);
        }
        Ok(())
    }

    fn handle_section_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.state.toggle_menu(),
            KeyCode::Char('c') => self.open_contact(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.state.goto_section(Section::ALL[index]);
            }
            KeyCode::Char('6') => self.open_contact(),
            KeyCode::Left | KeyCode::Char('h') => {
                let prev = self.state.current_section.prev();
                self.state.goto_section(prev);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let next = self.state.current_section.next();
                self.state.goto_section(next);
            }
            _ => self.handle_section_local_key(key),
        }
    }

    // Keys whose meaning depends on the section under the cursor
    fn handle_section_local_key(&mut self, key: KeyEvent) {
        match self.state.current_section {
            Section::Home => {
                if key.code == KeyCode::Enter {
                    // The hero's primary call to action
                    self.state.goto_section(Section::Technology);
                }
            }
            Section::Technology => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.state.card_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.state.card_next(),
                KeyCode::Enter | KeyCode::Char(' ') => self.state.flip_selected_card(),
                KeyCode::Char('r') => self.state.reset_cards(),
                _ => {}
            },
            Section::About => match key.code {
                KeyCode::Tab | KeyCode::Char('t') => self.state.about_tab.toggle(),
                KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.state.close_menu(),
            KeyCode::Up | KeyCode::Char('k') => self.state.menu_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.menu_next(),
            KeyCode::Enter => {
                match self.state.selected_menu_entry() {
                    MenuEntry::Section(section) => self.state.goto_section(section),
                    MenuEntry::Contact => self.open_contact(),
                }
                self.state.close_menu();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.contact_form;
        let on_submit_row = form.is_submit_row_active();

        match key.code {
            KeyCode::Esc => self.state.contact_open = false,
            // Submit shortcut works from any field
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact_form();
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit_contact_form();
            }
            // Leaving a field is the blur check
            KeyCode::Tab => {
                form.validate_active();
                form.next_field();
            }
            KeyCode::BackTab => {
                form.validate_active();
                form.prev_field();
            }
            KeyCode::Enter if on_submit_row => self.submit_contact_form(),
            KeyCode::Enter => {
                // Enter in the message field adds a newline
                if form.active_field() == 4 {
                    form.input_char('\n');
                }
            }
            KeyCode::Left => form.cycle_option(false),
            KeyCode::Right => form.cycle_option(true),
            KeyCode::Char(c) if !on_submit_row => form.input_char(c),
            KeyCode::Backspace if !on_submit_row => form.backspace(),
            _ => {}
        }
    }

    fn open_contact(&mut self) {
        self.state.close_menu();
        self.state.contact_open = true;
    }

    /// Run the full submit lifecycle up to spawning the remote send.
    ///
    /// Invalid input never reaches the relay; a submit while one is in
    /// flight is ignored.
    fn submit_contact_form(&mut self) {
        if self.state.contact_form.submission == SubmissionState::Sending {
            tracing::debug!("submit ignored while a send is in flight");
            return;
        }
        if !self.state.contact_form.validate_all() {
            tracing::debug!(
                errors = self.state.contact_form.error_count(),
                "submit blocked by validation"
            );
            return;
        }

        self.state.contact_form.submission = SubmissionState::Sending;
        let message = ContactMessage::from_form(&self.state.contact_form);
        let relay = Arc::clone(&self.relay);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(relay.send(message).await);
        });
        self.pending_send = Some(rx);
    }

    // Fold the completed send, if any, back into form state
    fn poll_submission(&mut self) {
        let Some(rx) = self.pending_send.as_mut() else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(anyhow::anyhow!("send task dropped its channel")),
        };
        self.pending_send = None;

        let form = &mut self.state.contact_form;
        match outcome {
            Ok(reply) if reply.success => {
                form.reset();
                form.submission = SubmissionState::Succeeded;
                let text = if reply.message.is_empty() {
                    SUCCESS_NOTICE.to_string()
                } else {
                    reply.message
                };
                self.state.show_notice(Notice::success(text));
            }
            Ok(reply) => {
                tracing::warn!(message = %reply.message, "relay rejected the message");
                form.submission = SubmissionState::Failed;
                self.state.show_notice(Notice::error(FAILURE_NOTICE));
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to reach the mail relay");
                form.submission = SubmissionState::Failed;
                self.state.show_notice(Notice::error(FAILURE_NOTICE));
            }
        }
    }

    // Remove an expired notice; a settled submission goes back to Idle with it
    fn expire_notice(&mut self) {
        let expired = self.state.notice.as_ref().is_some_and(Notice::is_expired);
        if !expired {
            return;
        }
        self.state.notice = None;
        let form = &mut self.state.contact_form;
        if matches!(
            form.submission,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            form.submission = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MockRelayClient;
    use crate::state::{NoticeKind, NOTICE_TTL};
    use mockall::Sequence;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fill_valid(app: &mut App) {
        let form = &mut app.state.contact_form;
        form.name.set_text("John Doe");
        form.email.set_text("john@example.com");
        form.message.set_text("Interested in your services");
    }

    fn ok_reply() -> RelayResponse {
        RelayResponse {
            success: true,
            message: "Thank you for your message! We'll get back to you soon.".to_string(),
        }
    }

    /// Tick until the in-flight send settles
    async fn settle(app: &mut App) {
        for _ in 0..100 {
            app.tick();
            if app.state.contact_form.submission != SubmissionState::Sending {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission never settled");
    }

    mod validation_gate {
        use super::*;

        #[tokio::test]
        async fn test_empty_form_submit_never_contacts_relay() {
            let mut mock = MockRelayClient::new();
            mock.expect_send().times(0);
            let mut app = App::with_relay(Arc::new(mock));

            app.submit_contact_form();

            let form = &app.state.contact_form;
            assert_eq!(form.submission, SubmissionState::Idle);
            assert_eq!(form.error_count(), 3);
            assert!(app.pending_send.is_none());
            assert!(app.state.notice.is_none());
        }

        #[tokio::test]
        async fn test_partial_errors_are_all_shown() {
            let mut mock = MockRelayClient::new();
            mock.expect_send().times(0);
            let mut app = App::with_relay(Arc::new(mock));
            app.state.contact_form.name.set_text("John123");
            app.state.contact_form.email.set_text("not-an-email");

            app.submit_contact_form();

            let form = &app.state.contact_form;
            assert_eq!(
                form.error_for("name"),
                Some("Name should only contain letters and spaces")
            );
            assert_eq!(
                form.error_for("email"),
                Some("Please enter a valid email address")
            );
            assert_eq!(form.error_for("message"), Some("This field is required"));
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_valid_submit_sends_once_and_resets_on_success() {
            let mut mock = MockRelayClient::new();
            mock.expect_send()
                .times(1)
                .withf(|message| {
                    message.name == "John Doe" && message.email == "john@example.com"
                })
                .returning(|_| Ok(ok_reply()));
            let mut app = App::with_relay(Arc::new(mock));
            fill_valid(&mut app);

            app.submit_contact_form();
            assert_eq!(
                app.state.contact_form.submission,
                SubmissionState::Sending
            );
            assert!(app.pending_send.is_some());

            settle(&mut app).await;

            let form = &app.state.contact_form;
            assert_eq!(form.submission, SubmissionState::Succeeded);
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.message.as_text(), "");
            let notice = app.state.notice.as_ref().expect("success notice");
            assert_eq!(notice.kind, NoticeKind::Success);
        }

        #[tokio::test]
        async fn test_failure_preserves_input_for_retry() {
            let mut mock = MockRelayClient::new();
            mock.expect_send()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("connection refused")));
            let mut app = App::with_relay(Arc::new(mock));
            fill_valid(&mut app);

            app.submit_contact_form();
            settle(&mut app).await;

            let form = &app.state.contact_form;
            assert_eq!(form.submission, SubmissionState::Failed);
            assert_eq!(form.name.as_text(), "John Doe");
            assert_eq!(form.message.as_text(), "Interested in your services");
            let notice = app.state.notice.as_ref().expect("failure notice");
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.text, "Failed to send message. Please try again.");
        }

        #[tokio::test]
        async fn test_unsuccessful_reply_counts_as_failure() {
            let mut mock = MockRelayClient::new();
            mock.expect_send().times(1).returning(|_| {
                Ok(RelayResponse {
                    success: false,
                    message: "Invalid email address".to_string(),
                })
            });
            let mut app = App::with_relay(Arc::new(mock));
            fill_valid(&mut app);

            app.submit_contact_form();
            settle(&mut app).await;

            assert_eq!(app.state.contact_form.submission, SubmissionState::Failed);
            // Remote rejections surface as the generic retry banner
            let notice = app.state.notice.as_ref().expect("failure notice");
            assert_eq!(notice.text, "Failed to send message. Please try again.");
        }

        #[tokio::test]
        async fn test_resubmit_after_failure_succeeds() {
            let mut mock = MockRelayClient::new();
            let mut seq = Sequence::new();
            mock.expect_send()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Err(anyhow::anyhow!("connection refused")));
            mock.expect_send()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(ok_reply()));
            let mut app = App::with_relay(Arc::new(mock));
            fill_valid(&mut app);

            app.submit_contact_form();
            settle(&mut app).await;
            assert_eq!(app.state.contact_form.submission, SubmissionState::Failed);

            app.submit_contact_form();
            settle(&mut app).await;
            assert_eq!(
                app.state.contact_form.submission,
                SubmissionState::Succeeded
            );
        }

        #[tokio::test]
        async fn test_double_submit_while_sending_sends_once() {
            let mut mock = MockRelayClient::new();
            mock.expect_send().times(1).returning(|_| Ok(ok_reply()));
            let mut app = App::with_relay(Arc::new(mock));
            fill_valid(&mut app);

            app.submit_contact_form();
            // Second submit arrives while the first is still Sending
            app.submit_contact_form();
            settle(&mut app).await;

            assert_eq!(
                app.state.contact_form.submission,
                SubmissionState::Succeeded
            );
        }

        #[tokio::test]
        async fn test_notice_expiry_returns_submission_to_idle() {
            let mut mock = MockRelayClient::new();
            mock.expect_send().times(1).returning(|_| Ok(ok_reply()));
            let mut app = App::with_relay(Arc::new(mock));
            fill_valid(&mut app);

            app.submit_contact_form();
            settle(&mut app).await;
            assert_eq!(
                app.state.contact_form.submission,
                SubmissionState::Succeeded
            );

            if let Some(notice) = app.state.notice.as_mut() {
                notice.backdate(NOTICE_TTL);
            }
            app.tick();

            assert!(app.state.notice.is_none());
            assert_eq!(app.state.contact_form.submission, SubmissionState::Idle);
        }

        #[tokio::test]
        async fn test_new_notice_replaces_old_and_restarts_clock() {
            let mock = MockRelayClient::new();
            let mut app = App::with_relay(Arc::new(mock));

            app.state.show_notice(Notice::error("first"));
            if let Some(notice) = app.state.notice.as_mut() {
                notice.backdate(NOTICE_TTL - Duration::from_millis(100));
            }
            app.state.show_notice(Notice::success("second"));
            app.tick();

            // The replacement is fresh; the old deadline must not remove it
            let notice = app.state.notice.as_ref().expect("replacement notice");
            assert_eq!(notice.text, "second");
        }
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_number_keys_jump_to_sections() {
            let mut app = App::with_relay(Arc::new(MockRelayClient::new()));
            app.handle_key(key(KeyCode::Char('4'))).unwrap();
            assert_eq!(app.state.current_section, Section::Technology);
        }

        #[tokio::test]
        async fn test_menu_enter_opens_contact_and_closes_menu() {
            let mut app = App::with_relay(Arc::new(MockRelayClient::new()));
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            assert!(app.state.menu_open);
            for _ in 0..MenuEntry::ALL.len() - 1 {
                app.handle_key(key(KeyCode::Down)).unwrap();
            }
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.contact_open);
            assert!(!app.state.menu_open);
        }

        #[tokio::test]
        async fn test_escape_closes_contact_modal() {
            let mut app = App::with_relay(Arc::new(MockRelayClient::new()));
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            assert!(app.state.contact_open);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.contact_open);
        }

        #[tokio::test]
        async fn test_typing_reaches_the_active_field() {
            let mut app = App::with_relay(Arc::new(MockRelayClient::new()));
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap(); // inquiry -> name
            for c in "Jo".chars() {
                app.handle_key(key(KeyCode::Char(c))).unwrap();
            }
            assert_eq!(app.state.contact_form.name.as_text(), "Jo");
        }

        #[tokio::test]
        async fn test_tab_out_of_empty_field_shows_required_error() {
            let mut app = App::with_relay(Arc::new(MockRelayClient::new()));
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap(); // inquiry -> name
            app.handle_key(key(KeyCode::Tab)).unwrap(); // name -> email, name blurs
            assert_eq!(
                app.state.contact_form.error_for("name"),
                Some("This field is required")
            );
        }

        #[tokio::test]
        async fn test_card_flip_round_trip() {
            let mut app = App::with_relay(Arc::new(MockRelayClient::new()));
            app.handle_key(key(KeyCode::Char('4'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.flipped[0]);
            app.handle_key(key(KeyCode::Char('r'))).unwrap();
            assert!(!app.state.flipped[0]);
        }
    }
}
