//! Conversation session service.
//!
//! A session owns one conversation and wires the dialog engine to the
//! ports: it feeds customer turns into the engine, fulfils the side
//! effects the handlers request, and pushes everything that happened
//! onto a per-conversation output channel. The engine itself never
//! suspends; only collaborator calls are awaited here, each with a
//! bounded timeout and a fallback.

use std::collections::VecDeque;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::conversation::{
    apply_claim_result, apply_email_result, apply_travel, respond, start, Conversation,
    CustomerInput, DialogEffect, Stage,
};
use crate::domain::estimate::{LegMeasure, TravelPlan};
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::{
    CardDetails, CardToken, DistanceProvider, MediaStore, MediaUpload, NotificationDispatcher,
    PaymentTokenizer, SessionSnapshot, SnapshotStore,
};

use super::events::SessionEvent;

/// Errors surfaced to whoever drives a session.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The dialog rejected the turn (stale stage, conversation not started).
    #[error("Dialog error: {0}")]
    Dialog(String),

    /// Snapshot persistence failed.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// The per-session photo allowance is used up.
    #[error("Photo limit of {limit} reached")]
    PhotoLimit { limit: u32 },

    /// Photo upload failed.
    #[error("Photo upload error: {0}")]
    Photo(String),

    /// Card tokenization failed.
    #[error("Payment error: {0}")]
    Payment(String),
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        SessionError::Dialog(err.to_string())
    }
}

/// Shared collaborators handed to every session.
#[derive(Clone)]
pub struct SessionDeps {
    pub distance: Arc<dyn DistanceProvider>,
    pub notifications: Arc<dyn NotificationDispatcher>,
    pub tokenizer: Arc<dyn PaymentTokenizer>,
    pub media: Arc<dyn MediaStore>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub config: AppConfig,
}

/// One live guided dialog, from greeting to hand-off.
pub struct ConversationSession {
    conversation: Conversation,
    deps: SessionDeps,
    events: mpsc::UnboundedSender<SessionEvent>,
    /// Transcript entries already pushed onto the channel.
    emitted: usize,
    last_stage: Stage,
}

impl ConversationSession {
    /// Opens a fresh conversation and plays the scripted greeting.
    ///
    /// # Errors
    ///
    /// - `Dialog` if the opener cannot run (never the case for a fresh
    ///   conversation)
    pub fn begin(
        deps: SessionDeps,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SessionEvent>), SessionError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut session = Self {
            conversation: Conversation::new(ConversationId::new()),
            deps,
            events: tx,
            emitted: 0,
            last_stage: Stage::Greeting,
        };
        start(&mut session.conversation)?;
        session.flush();
        info!(conversation_id = %session.conversation.id(), "Conversation started");
        Ok((session, rx))
    }

    /// Resumes a saved conversation if one exists within the retention
    /// window.
    ///
    /// An expired snapshot is purged and `None` is returned so the caller
    /// can begin fresh. A resumed session does not replay the transcript
    /// through the channel; the driver re-renders from [`messages`].
    ///
    /// [`messages`]: Self::messages
    ///
    /// # Errors
    ///
    /// - `Snapshot` if the store cannot be read or purged
    pub async fn resume(
        id: ConversationId,
        deps: SessionDeps,
    ) -> Result<Option<(Self, mpsc::UnboundedReceiver<SessionEvent>)>, SessionError> {
        let snapshot = deps
            .snapshots
            .load(id)
            .await
            .map_err(|err| SessionError::Snapshot(err.to_string()))?;
        let Some(snapshot) = snapshot else {
            return Ok(None);
        };

        if snapshot.is_expired(deps.config.session.retention_hours) {
            info!(conversation_id = %id, "Saved session expired; purging");
            deps.snapshots
                .delete(id)
                .await
                .map_err(|err| SessionError::Snapshot(err.to_string()))?;
            return Ok(None);
        }

        let conversation = snapshot.conversation;
        info!(
            conversation_id = %id,
            stage = ?conversation.stage(),
            "Conversation resumed"
        );
        let (tx, rx) = mpsc::unbounded_channel();
        let emitted = conversation.message_count();
        let last_stage = conversation.stage();
        let session = Self {
            conversation,
            deps,
            events: tx,
            emitted,
            last_stage,
        };
        Ok(Some((session, rx)))
    }

    pub fn id(&self) -> &ConversationId {
        self.conversation.id()
    }

    pub fn stage(&self) -> Stage {
        self.conversation.stage()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Returns the transcript in display order.
    pub fn messages(&self) -> &[crate::domain::conversation::Message] {
        self.conversation.messages()
    }

    pub fn can_go_back(&self) -> bool {
        self.conversation.can_go_back()
    }

    /// Processes one customer turn end to end: the engine consumes the
    /// input, requested side effects run against the ports, and the
    /// updated conversation is saved best-effort.
    ///
    /// # Errors
    ///
    /// - `Dialog` if the turn is stale or the stage takes no input
    pub async fn handle_input(
        &mut self,
        origin: Stage,
        input: CustomerInput,
    ) -> Result<(), SessionError> {
        let effects = respond(&mut self.conversation, origin, input)?;
        self.flush();
        self.run_effects(effects).await?;
        self.autosave().await;
        Ok(())
    }

    /// Rewinds one answer. The transcript is truncated, so a stage event
    /// is always emitted and the driver re-renders from [`messages`].
    ///
    /// [`messages`]: Self::messages
    ///
    /// # Errors
    ///
    /// - `Dialog` if this stage forbids going back or there is nothing to
    ///   go back to
    pub async fn go_back(&mut self) -> Result<(), SessionError> {
        self.conversation.go_back()?;
        self.emitted = self.conversation.message_count();
        let stage = self.conversation.stage();
        self.last_stage = stage;
        self.emit(SessionEvent::StageChanged { stage });
        self.autosave().await;
        Ok(())
    }

    /// Stores a customer photo and records its URL, up to the configured
    /// allowance.
    ///
    /// # Errors
    ///
    /// - `PhotoLimit` once the allowance is used up
    /// - `Photo` if the media store rejects the upload
    pub async fn upload_photo(&mut self, upload: MediaUpload) -> Result<String, SessionError> {
        let limit = self.deps.config.session.max_photos;
        if self.conversation.record().photo_urls.len() >= limit as usize {
            return Err(SessionError::PhotoLimit { limit });
        }

        let stored = self
            .deps
            .media
            .upload(upload)
            .await
            .map_err(|err| SessionError::Photo(err.to_string()))?;

        let record = self.conversation.record_mut();
        record.has_photos = true;
        record.photo_urls.push(stored.url.clone());
        self.autosave().await;
        Ok(stored.url)
    }

    /// Exchanges card details for an opaque token at booking time. Card
    /// details are never stored; only the token leaves this call.
    ///
    /// # Errors
    ///
    /// - `Payment` if the tokenizer rejects the card
    pub async fn book_with_card(&self, card: CardDetails) -> Result<CardToken, SessionError> {
        let token = self
            .deps
            .tokenizer
            .tokenize_card(card)
            .await
            .map_err(|err| SessionError::Payment(err.to_string()))?;
        info!(conversation_id = %self.conversation.id(), "Card tokenized for booking");
        Ok(token)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Effects
    // ─────────────────────────────────────────────────────────────────────────

    /// Fulfils handler effects in order. Fulfilling one effect can feed a
    /// result back into the engine and surface more effects, so this runs
    /// as a queue rather than a single pass.
    async fn run_effects(&mut self, effects: Vec<DialogEffect>) -> Result<(), SessionError> {
        let mut queue: VecDeque<DialogEffect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                DialogEffect::MeasureTravel => {
                    let plan = self.measure_travel().await;
                    let radius = self.deps.config.company.service_radius_miles;
                    let more = apply_travel(&mut self.conversation, plan, radius)?;
                    self.flush();
                    queue.extend(more);
                }
                DialogEffect::ShowEstimate => {
                    let total = self
                        .conversation
                        .record()
                        .estimate
                        .as_ref()
                        .map(|estimate| estimate.total());
                    self.emit(SessionEvent::EstimateReady { total });
                }
                DialogEffect::EmailEstimate => {
                    let delivered = self.deliver_estimate().await;
                    let more = apply_email_result(&mut self.conversation, delivered)?;
                    self.flush();
                    queue.extend(more);
                }
                DialogEffect::SubmitClaim => {
                    let delivered = self.submit_claim().await;
                    let more = apply_claim_result(&mut self.conversation, delivered)?;
                    self.flush();
                    queue.extend(more);
                }
                DialogEffect::OpenScheduler => {
                    self.emit(SessionEvent::SchedulerOpened);
                }
                DialogEffect::OpenDialer => {
                    let phone = self.deps.config.company.phone.clone();
                    self.emit(SessionEvent::DialerPrompted { phone });
                }
                DialogEffect::Restarted => {
                    self.emit(SessionEvent::ConversationRestarted);
                }
            }
        }
        Ok(())
    }

    /// Measures every leg of the trip in order. Later legs depend on
    /// whether a third stop exists, so the calls are sequential.
    async fn measure_travel(&self) -> TravelPlan {
        let base = self.deps.config.company.base_address.clone();
        let record = self.conversation.record();
        let from = record.from_address.clone().unwrap_or_default();
        let to = record.to_address.clone().unwrap_or_default();
        let third = record
            .has_third_location
            .then(|| record.third_address.clone())
            .flatten();

        let mut plan = TravelPlan::default();

        let (leg, tolls, fell_back) = self.measure_leg(&base, &from).await;
        plan.base_to_pickup = Some(leg);
        plan.has_tolls |= tolls;
        plan.used_fallback |= fell_back;

        let (leg, tolls, fell_back) = self.measure_leg(&from, &to).await;
        plan.pickup_to_destination = Some(leg);
        plan.has_tolls |= tolls;
        plan.used_fallback |= fell_back;

        let return_from = match &third {
            Some(third_address) => {
                let (leg, tolls, fell_back) = self.measure_leg(&to, third_address).await;
                plan.destination_to_third = Some(leg);
                plan.has_tolls |= tolls;
                plan.used_fallback |= fell_back;
                third_address.clone()
            }
            None => to,
        };

        let (leg, tolls, fell_back) = self.measure_leg(&return_from, &base).await;
        plan.final_return_to_base = Some(leg);
        plan.has_tolls |= tolls;
        plan.used_fallback |= fell_back;

        plan
    }

    /// One provider call with the configured timeout. Any failure
    /// degrades to the fixed fallback leg instead of blocking the dialog.
    async fn measure_leg(&self, origin: &str, destination: &str) -> (LegMeasure, bool, bool) {
        let timeout = self.deps.config.distance.timeout();
        match tokio::time::timeout(timeout, self.deps.distance.measure(origin, destination)).await
        {
            Ok(Ok(leg)) => (
                LegMeasure {
                    miles: leg.miles,
                    hours: leg.hours,
                },
                leg.has_tolls,
                false,
            ),
            Ok(Err(err)) => {
                warn!(
                    origin,
                    destination,
                    error = %err,
                    retryable = err.is_retryable(),
                    "Distance lookup failed; using the fallback leg"
                );
                (self.fallback_leg(), false, true)
            }
            Err(_) => {
                warn!(
                    origin,
                    destination,
                    "Distance lookup timed out; using the fallback leg"
                );
                (self.fallback_leg(), false, true)
            }
        }
    }

    fn fallback_leg(&self) -> LegMeasure {
        LegMeasure {
            miles: self.deps.config.distance.fallback_miles,
            hours: self.deps.config.distance.fallback_hours,
        }
    }

    /// Submits the lead, then the customer quote. Both must land for the
    /// dialog to report success; either failure is retryable from the
    /// booking menu.
    async fn deliver_estimate(&self) -> bool {
        let record = self.conversation.record();
        if let Err(err) = self.deps.notifications.send_lead(record).await {
            warn!(
                conversation_id = %self.conversation.id(),
                error = %err,
                retryable = err.is_retryable(),
                "Lead submission failed"
            );
            return false;
        }
        if let Err(err) = self.deps.notifications.send_quote(record).await {
            warn!(
                conversation_id = %self.conversation.id(),
                error = %err,
                retryable = err.is_retryable(),
                "Quote email failed"
            );
            return false;
        }
        true
    }

    async fn submit_claim(&self) -> bool {
        let record = self.conversation.record();
        if let Err(err) = self.deps.notifications.send_lead(record).await {
            warn!(
                conversation_id = %self.conversation.id(),
                error = %err,
                retryable = err.is_retryable(),
                "Claim submission failed"
            );
            return false;
        }
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output channel
    // ─────────────────────────────────────────────────────────────────────────

    /// Pushes transcript entries the channel has not seen yet, then a
    /// stage event if the stage moved.
    fn flush(&mut self) {
        // A restart wipes the log; replay the fresh opener from the top.
        if self.emitted > self.conversation.message_count() {
            self.emitted = 0;
        }

        let pending: Vec<SessionEvent> = self.conversation.messages()[self.emitted..]
            .iter()
            .map(|message| SessionEvent::MessageAppended {
                speaker: message.speaker(),
                content: message.content().to_string(),
                delay_ms: message.delay_ms(),
            })
            .collect();
        self.emitted = self.conversation.message_count();
        for event in pending {
            self.emit(event);
        }

        let stage = self.conversation.stage();
        if stage != self.last_stage {
            debug!(
                conversation_id = %self.conversation.id(),
                from = ?self.last_stage,
                to = ?stage,
                "Stage changed"
            );
            self.last_stage = stage;
            self.emit(SessionEvent::StageChanged { stage });
        }
    }

    fn emit(&self, event: SessionEvent) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.events.send(event);
    }

    async fn autosave(&self) {
        let snapshot = SessionSnapshot::of(self.conversation.clone());
        if let Err(err) = self.deps.snapshots.save(&snapshot).await {
            warn!(
                conversation_id = %self.conversation.id(),
                error = %err,
                "Session snapshot save failed"
            );
        }
    }
}
