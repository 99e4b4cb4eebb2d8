use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

/// Outward-facing Bale API port.
///
/// The core never talks HTTP itself; adapter crates implement this trait and
/// map their transport failures into [`crate::Error::Api`]. One handle may be
/// shared across many decoded entities, so implementations must tolerate
/// concurrent calls; the core imposes no ordering on them.
#[async_trait]
pub trait ApiPort: Send + Sync {
    /// `answerCallbackQuery`: dismiss the client-side loading state and
    /// optionally show `text` as a toast, or as an alert popup when
    /// `show_alert` is set.
    async fn answer_callback_query(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
        cache_time: Option<u32>,
    ) -> Result<()>;

    /// `answerPreCheckoutQuery`: approve or decline a pending payment.
    ///
    /// Bale expects the answer within the payment window; enforcing that
    /// deadline is the dispatch loop's job, not this port's.
    async fn answer_pre_checkout_query(
        &self,
        query_id: &str,
        ok: bool,
        error_message: Option<&str>,
    ) -> Result<()>;
}

/// Shared handle to the API port, threaded through entity decoding so
/// behavior methods can issue outward calls without the caller re-supplying a
/// client.
pub type ApiHandle = Arc<dyn ApiPort>;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Recording fake shared by the crate's decode and behavior tests.
    #[derive(Default)]
    pub(crate) struct RecordingApi {
        pub(crate) callback_answers: Mutex<Vec<(String, Option<String>, bool, Option<u32>)>>,
        pub(crate) pre_checkout_answers: Mutex<Vec<(String, bool, Option<String>)>>,
    }

    #[async_trait]
    impl ApiPort for RecordingApi {
        async fn answer_callback_query(
            &self,
            callback_id: &str,
            text: Option<&str>,
            show_alert: bool,
            cache_time: Option<u32>,
        ) -> Result<()> {
            self.callback_answers.lock().unwrap().push((
                callback_id.to_string(),
                text.map(str::to_string),
                show_alert,
                cache_time,
            ));
            Ok(())
        }

        async fn answer_pre_checkout_query(
            &self,
            query_id: &str,
            ok: bool,
            error_message: Option<&str>,
        ) -> Result<()> {
            self.pre_checkout_answers.lock().unwrap().push((
                query_id.to_string(),
                ok,
                error_message.map(str::to_string),
            ));
            Ok(())
        }
    }

    /// A handle plus the concrete fake for inspecting recorded calls.
    pub(crate) fn recording() -> (ApiHandle, Arc<RecordingApi>) {
        let api = Arc::new(RecordingApi::default());
        let handle: ApiHandle = api.clone();
        (handle, api)
    }

    /// A handle for decode tests that never issue outward calls.
    pub(crate) fn noop() -> ApiHandle {
        Arc::new(RecordingApi::default())
    }
}
