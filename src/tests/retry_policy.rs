// Retry policy mechanics at the unit level: retryable errors are
// re-attempted up to the ceiling, non-retryable errors return on the
// attempt that produced them.

#[cfg(test)]
mod test {

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use http::StatusCode;

    use crate::error::Error;
    use crate::resilience::retry::RetryPolicy;

    fn fast_policy(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            base_delay: Duration::from_millis(5),
            max_delay: Duration::from_millis(20),
        }
    }

    /// A real connection-refused failure, classified by `From<reqwest::Error>`.
    async fn transport_error() -> Error {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("port 1 must refuse connections");
        Error::from(err)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn transport_errors_are_classified_retryable() {
        assert!(transport_error().await.is_retryable());
        assert!(!Error::Status(StatusCode::UNAUTHORIZED).is_retryable());
        assert!(!Error::Auth(StatusCode::INTERNAL_SERVER_ERROR).is_retryable());
        assert!(!Error::MalformedToken.is_retryable());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn retries_transport_failures_until_success() {
        let calls = AtomicUsize::new(0);

        let result = fast_policy(3)
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(transport_error().await)
                    } else {
                        Ok("finally")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "finally");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn gives_up_after_attempt_ceiling() {
        let calls = AtomicUsize::new(0);

        let result: Result<(), _> = fast_policy(2)
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(transport_error().await) }
            })
            .await;

        assert!(result.unwrap_err().is_retryable());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn status_errors_are_not_retried() {
        let calls = AtomicUsize::new(0);

        let result: Result<(), _> = fast_policy(3)
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(Error::Status(StatusCode::BAD_REQUEST)) }
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            Error::Status(StatusCode::BAD_REQUEST)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
