use crate::{error::TaskError, types::Priority};

use combine::error::ParseError;
use combine::parser::char::{char, spaces, string};
use combine::{
    eof,
    parser::choice::{choice, optional},
    stream::position,
    EasyParser, Parser, Stream,
};

/// A line typed into the command bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HomeCommand {
    Add,
    Delete,
    Complete,
    Priority(Priority),
    Reset,
    Quit,
}

/// Matches `head` optionally followed by the rest of the word, so both `d`
/// and `delete` work.
macro_rules! word {
    ($head:literal, $tail:literal) => {
        char($head).and(optional(string($tail)))
    };
}

fn priority<Input>() -> impl Parser<Input, Output = Priority>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    choice((
        word!('h', "igh").map(|_| Priority::High),
        word!('m', "edium").map(|_| Priority::Medium),
        word!('l', "ow").map(|_| Priority::Low),
    ))
}

fn command<Input>() -> impl Parser<Input, Output = HomeCommand>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    choice((
        word!('a', "dd").map(|_| HomeCommand::Add),
        word!('d', "elete").map(|_| HomeCommand::Delete),
        word!('c', "omplete").map(|_| HomeCommand::Complete),
        word!('p', "riority")
            .skip(spaces().silent())
            .with(priority())
            .map(HomeCommand::Priority),
        word!('r', "eset").map(|_| HomeCommand::Reset),
        word!('q', "uit").map(|_| HomeCommand::Quit),
    ))
}

fn command_line<Input>() -> impl Parser<Input, Output = HomeCommand>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    spaces()
        .silent()
        .with(command())
        .skip(spaces().silent())
        .skip(eof())
}

pub(crate) fn parse_home_command(input: &str) -> Result<HomeCommand, TaskError> {
    let lower = input.to_ascii_lowercase();
    // Bound so the borrowed parse error is dropped before `lower`.
    let parsed = command_line()
        .easy_parse(position::Stream::new(lower.as_str()))
        .map(|(command, _)| command)
        .map_err(|_| TaskError::UnknownCommand(input.trim().to_owned()));
    parsed
}
