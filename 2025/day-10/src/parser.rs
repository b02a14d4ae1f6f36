use chumsky::prelude::*;
use miette::{miette, Result};

use crate::error::SolveError;
use crate::scenario::Scenario;
use crate::vector::{Amount, Button, Row, Vector};

/// Parses one machine per line: `[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}`.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Scenario>, extra::Err<Rich<'a, char>>> {
    // Custom whitespace parser that excludes newlines
    let hspace = one_of(" \t").repeated();

    let light = choice((just('.').to(false), just('#').to(true)));

    // [.##.]
    let diagram = light
        .repeated()
        .collect::<Vec<bool>>()
        .delimited_by(just('['), just(']'));

    let index = text::int(10).try_map(|digits: &str, span| {
        digits
            .parse::<usize>()
            .map_err(|err| Rich::custom(span, err))
    });

    // (0,2,3)
    let indices = index
        .separated_by(just(','))
        .collect::<Vec<usize>>()
        .delimited_by(just('('), just(')'));

    // (0,2) (1,3) ...
    let buttons = indices
        .padded_by(hspace.clone())
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>();

    let amount = text::int(10).try_map(|digits: &str, span| {
        digits
            .parse::<Amount>()
            .map_err(|err| Rich::custom(span, err))
    });

    // {3,5,4,7}
    let joltage = amount
        .separated_by(just(','))
        .collect::<Vec<Amount>>()
        .delimited_by(just('{'), just('}'));

    let machine = diagram
        .then_ignore(hspace.clone())
        .then(buttons)
        .then(joltage)
        .then_ignore(hspace)
        .try_map(|((lights, buttons), joltage), span| {
            build_scenario(lights, &buttons, &joltage).map_err(|err| Rich::custom(span, err))
        });

    machine
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

fn build_scenario(
    lights: Vec<bool>,
    buttons: &[Vec<usize>],
    joltage: &[Amount],
) -> std::result::Result<Scenario, SolveError> {
    let indicator = Button::new(lights.into_iter().collect::<Row>());
    let dimensions = indicator.dimensions();
    let buttons = buttons
        .iter()
        .map(|indices| Button::from_indices(indices, dimensions))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let target = Vector::from_slice(joltage)?;

    Scenario::new(indicator, buttons, target)
}

/// Parses the whole puzzle input.
pub fn parse(input: &str) -> Result<Vec<Scenario>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// Parses a single machine.
pub fn parse_scenario(line: &str) -> Result<Scenario> {
    let mut scenarios = parse(line)?;
    match scenarios.len() {
        1 => Ok(scenarios.remove(0)),
        count => Err(miette!("Expected exactly one machine, found {count}")),
    }
}
