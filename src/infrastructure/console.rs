use crate::domain::ports::Publisher;
use crate::domain::WebhookPayload;
use crate::error::Result;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// Writes the message to a local stream instead of posting it.
pub struct ConsolePublisher<W = Stdout> {
    out: Mutex<W>,
}

impl ConsolePublisher<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(tokio::io::stdout())
    }
}

impl<W> ConsolePublisher<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W> Publisher for ConsolePublisher<W>
where
    W: AsyncWrite + Unpin,
{
    async fn publish(&self, payload: &WebhookPayload) -> Result<()> {
        let mut out = self.out.lock().await;
        out.write_all(payload.text.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
        Ok(())
    }
}
