//! Top-level entry points that drive a parser over a complete input.

use crate::effect::{Effect, Identity};
use crate::error::ParseError;
use crate::parser::{Parser, Reply};
use crate::state::State;
use tracing::{debug, trace, trace_span};

/// Options for a top-level parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseConfig {
    consume_all: bool,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the parser to reach the end of input
    ///
    /// A parse that succeeds with input left over then fails at the final
    /// position with `"expected the end of the string"`.
    pub fn consume_all(mut self, consume_all: bool) -> Self {
        self.consume_all = consume_all;
        self
    }

    pub fn requires_consume_all(&self) -> bool {
        self.consume_all
    }
}

/// Run a pure parser over `input`
///
/// Returns the value and the final character position on success. The
/// error's `Display` is `Parse failed at position <N>: <message>`.
pub fn parse<P, T>(parser: P, input: &str) -> Result<(T, usize), ParseError>
where
    P: for<'code> Parser<'code, Effect = Identity, Output = T>,
{
    parse_with(&ParseConfig::default(), parser, input)
}

/// [`parse`] with explicit options
pub fn parse_with<P, T>(config: &ParseConfig, parser: P, input: &str) -> Result<(T, usize), ParseError>
where
    P: for<'code> Parser<'code, Effect = Identity, Output = T>,
{
    parse_t_with(config, parser, input)
}

/// Run a parser in its effect context over `input`
///
/// Same contract as [`parse`], but the result stays wrapped in the parser's
/// effect, e.g. `(Result<..>, Vec<W>)` for [`crate::Writer`].
pub fn parse_t<M, P, T>(parser: P, input: &str) -> M::Wrap<Result<(T, usize), ParseError>>
where
    M: Effect,
    P: for<'code> Parser<'code, Effect = M, Output = T>,
{
    parse_t_with(&ParseConfig::default(), parser, input)
}

/// [`parse_t`] with explicit options
pub fn parse_t_with<M, P, T>(
    config: &ParseConfig,
    parser: P,
    input: &str,
) -> M::Wrap<Result<(T, usize), ParseError>>
where
    M: Effect,
    P: for<'code> Parser<'code, Effect = M, Output = T>,
{
    let chars: Vec<char> = input.chars().collect();
    let span = trace_span!("parse", chars = chars.len());
    let _entered = span.enter();

    let state = State::new(&chars);
    M::fmap(parser.run(state), |reply| finish(config, reply))
}

fn finish<T>(config: &ParseConfig, reply: Reply<'_, T>) -> Result<(T, usize), ParseError> {
    let result = match reply {
        Ok((_, end)) if config.consume_all && !end.is_at_end() => {
            Err(ParseError::at(&end, "expected the end of the string"))
        }
        Ok((value, end)) => Ok((value, end.position())),
        Err(error) => Err(error),
    };

    match &result {
        Ok((_, position)) => trace!(position, "parse succeeded"),
        Err(error) => debug!(
            position = error.position(),
            message = error.message(),
            "parse failed"
        ),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::effect::Writer;
    use crate::lift::tell;
    use crate::many::many;
    use crate::text::{char, satisfy, string};

    #[test]
    fn test_parse_reports_final_position() {
        let (value, position) = parse(string("ab"), "abc").unwrap();
        assert_eq!(value, "ab");
        assert_eq!(position, 2);
    }

    #[test]
    fn test_parse_failure_message_format() {
        let error = parse(char('x'), "abc").unwrap_err();
        assert_eq!(error.to_string(), "Parse failed at position 0: satisfy");
    }

    #[test]
    fn test_parse_empty_input() {
        let (value, position) = parse(many(satisfy(|_| true)), "").unwrap();
        assert!(value.is_empty());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_consume_all_rejects_leftover_input() {
        let config = ParseConfig::new().consume_all(true);

        let error = parse_with(&config, string("ab"), "abc").unwrap_err();
        assert_eq!(error.position(), 2);
        assert_eq!(error.message(), "expected the end of the string");

        let (_, position) = parse_with(&config, string("abc"), "abc").unwrap();
        assert_eq!(position, 3);
    }

    #[test]
    fn test_default_config_allows_leftover_input() {
        let config = ParseConfig::default();
        assert!(!config.requires_consume_all());
        assert!(parse_with(&config, string("a"), "abc").is_ok());
    }

    #[test]
    fn test_parse_t_keeps_effect_output() {
        let (result, log) = parse_t(tell("ran".to_string()), "anything");
        assert_eq!(result.unwrap(), ((), 0));
        assert_eq!(log, vec!["ran".to_string()]);
    }

    #[test]
    fn test_parse_t_effects_survive_failure() {
        let parser = tell("before".to_string()).and(char::<Writer<String>>('z'));

        let (result, log) = parse_t(parser, "a");
        assert_eq!(result.unwrap_err().position(), 0);
        assert_eq!(log, vec!["before".to_string()]);
    }
}
