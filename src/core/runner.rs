use crate::config::cli::Invocation;
use crate::domain::ports::VerseSource;
use crate::utils::error::Result;
use std::io::Write;

pub struct VerseRunner<S: VerseSource> {
    source: S,
}

impl<S: VerseSource> VerseRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 回傳是否有實際查詢並輸出
    pub async fn run<W: Write>(&self, invocation: &Invocation, out: &mut W) -> Result<bool> {
        let Some(reference) = invocation.reference() else {
            tracing::debug!("Arguments supplied, nothing to do: {:?}", invocation);
            return Ok(false);
        };

        tracing::info!("Looking up {}", reference);
        let body = self.source.fetch_verses(reference).await?;

        writeln!(out, "{}", body)?;
        out.flush()?;
        Ok(true)
    }
}
