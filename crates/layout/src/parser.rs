use crate::LayoutError;
use crate::cache::MetricsCache;
use crate::context::{LayoutContext, Run, Token};
use crate::punctuation;
use crate::unicode;
use stone_types::Size;

/// Turns text into the run and token buffers of a [`LayoutContext`].
pub struct Parser<'a> {
    cache: &'a MetricsCache,
}

impl<'a> Parser<'a> {
    pub fn new(cache: &'a MetricsCache) -> Self {
        Self { cache }
    }

    /// Replaces the context's runs and tokens with those of `text`.
    ///
    /// One run per Unicode scalar; `\r\n` collapses into a single newline run.
    /// A new token starts at every newline. Measurement failure leaves the
    /// context empty.
    pub fn parse(&self, ctx: &mut LayoutContext, text: &str) -> Result<(), LayoutError> {
        ctx.clear();

        let mut runs = Vec::with_capacity(text.len());
        let mut tokens = vec![Token::default()];

        let mut chars = text.chars().peekable();
        while let Some(mut ch) = chars.next() {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
                ch = '\n';
            }

            if unicode::is_newline(ch) && tokens.last().is_some_and(|t| !t.run_ids.is_empty()) {
                tokens.push(Token::default());
            }
            let token_id = tokens.len() - 1;

            let run = self.create_run(ctx, ch, token_id)?;
            tokens[token_id].run_ids.push(runs.len());
            runs.push(run);
        }

        if runs.is_empty() {
            tokens.clear();
        }

        log::debug!(
            "Parsed {} runs into {} tokens (cache hit rate {:.1}%)",
            runs.len(),
            tokens.len(),
            self.cache.hit_rate() * 100.0
        );
        ctx.runs = runs;
        ctx.tokens = tokens;
        Ok(())
    }

    fn create_run(
        &self,
        ctx: &LayoutContext,
        ch: char,
        token_id: usize,
    ) -> Result<Run, LayoutError> {
        let script = unicode::script_of(ch);
        let family = ctx.fonts.font_family(script);
        let font_size = ctx.font_size * ctx.fonts.font_scale(script);

        let width = if unicode::is_newline(ch) {
            0.0
        } else {
            self.cache.get_or_measure(ch, family, font_size)?.width
        };

        let mut run = Run::new(
            ch,
            script,
            Size::new(width, font_size * ctx.line_height),
            token_id,
        );
        run.punctuation_type = punctuation::classify(ch);
        Ok(run)
    }
}
