use core::ops::Range;

use lib::input::IStrError;
use lib::prelude::*;

lib::entry!("d05.txt", solve);

/// Width of a crate cell in the drawing, including the separating space.
const CELL: usize = 4;

fn solve(input: IStr) -> Result<(String, String)> {
    let mut lines = input.lines(Trim::Keep);
    let mut stacks = Stacks::default();

    for line in lines.by_ref() {
        if line.as_data().iter().all(u8::is_ascii_whitespace) {
            break;
        }

        stacks
            .draw(line)
            .map_err(|error| IStrError::boxed(span(line), error))?;
    }

    stacks.finish();
    debug!("{stacks:?}");

    let mut single = stacks.clone();
    let mut bulk = stacks;

    for line in lines.filter(|line| !line.as_data().trim().is_empty()) {
        let m = line.parse::<Move>()?;
        debug!("{m:?}");

        single
            .apply(&m, Crane::Single)
            .and_then(|()| bulk.apply(&m, Crane::Bulk))
            .map_err(|error| IStrError::boxed(span(line), error))?;
    }

    Ok((single.tops(), bulk.tops()))
}

fn span(line: IStr) -> Range<usize> {
    line.index()..line.index() + line.len()
}

#[derive(Debug, Clone, Copy)]
enum Crane {
    /// Moves one crate at a time, reversing their order.
    Single,
    /// Moves all crates at once, keeping their order.
    Bulk,
}

#[derive(Debug, Clone, Default)]
struct Stacks {
    stacks: Vec<Vec<u8>>,
}

impl Stacks {
    /// Feed a line of the drawing, which is either a row of crates or the
    /// row of stack labels.
    fn draw(&mut self, line: IStr) -> Result<()> {
        if !line.as_data().contains(&b'[') {
            let labels = line.parse::<Vec<usize>>()?;

            if let Some(&last) = labels.iter().max() {
                self.grow(last);
            }

            return Ok(());
        }

        for (n, cell) in chunker(line.as_data(), CELL, Grouping::Distinct).enumerate() {
            match cell {
                [b'[', label, b']', ..] => {
                    self.grow(n + 1);
                    self.stacks[n].push(*label);
                }
                cell if cell.iter().all(u8::is_ascii_whitespace) => {}
                cell => bail!("bad crate `{}` in drawing", cell.as_bstr()),
            }
        }

        Ok(())
    }

    fn grow(&mut self, len: usize) {
        if self.stacks.len() < len {
            self.stacks.resize_with(len, Vec::new);
        }
    }

    /// Drawings list crates top to bottom, so flip each stack once the
    /// drawing is complete.
    fn finish(&mut self) {
        for stack in &mut self.stacks {
            stack.reverse();
        }
    }

    fn apply(&mut self, m: &Move, crane: Crane) -> Result<()> {
        let from = self.index(m.from)?;
        let to = self.index(m.to)?;

        if from == to {
            ensure!(
                self.stacks[from].len() >= m.count,
                "stack {} holds fewer than {} crates",
                m.from,
                m.count
            );

            return Ok(());
        }

        let (source, target) = self
            .stacks
            .get_mut2(from, to)
            .context("missing stacks")?;

        match crane {
            Crane::Single => {
                for _ in 0..m.count {
                    let label = source
                        .pop()
                        .with_context(|| anyhow!("stack {} is empty", m.from))?;
                    target.push(label);
                }
            }
            Crane::Bulk => {
                let at = source
                    .len()
                    .checked_sub(m.count)
                    .with_context(|| anyhow!("stack {} holds fewer than {} crates", m.from, m.count))?;
                target.extend(source.drain(at..));
            }
        }

        Ok(())
    }

    /// Translate a one-based stack number into an index.
    fn index(&self, number: usize) -> Result<usize> {
        match number.checked_sub(1) {
            Some(index) if index < self.stacks.len() => Ok(index),
            _ => bail!("no stack numbered {number}"),
        }
    }

    /// Labels of the top crates, skipping empty stacks.
    fn tops(&self) -> String {
        self.stacks
            .iter()
            .filter_map(|stack| stack.last())
            .map(|&label| char::from(label))
            .collect()
    }
}

#[derive(Debug)]
struct Move {
    count: usize,
    from: usize,
    to: usize,
}

lib::from_input! {
    |value: (W<&'static str>, usize, W<&'static str>, usize, W<&'static str>, usize)| -> Move {
        let (W(verb), count, W(from_word), from, W(to_word), to) = value;
        ensure!(
            verb == "move" && from_word == "from" && to_word == "to",
            "expected `move <count> from <stack> to <stack>`"
        );
        Ok(Move { count, from, to })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const SAMPLE: &str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2\n",
    );

    #[test]
    fn test_sample() {
        let (part1, part2) = solve(IStr::new(SAMPLE.as_bytes())).unwrap();
        assert_eq!(part1, "CMZ");
        assert_eq!(part2, "MCD");
    }

    #[test]
    fn test_crane_order() {
        let input = concat!("[A]    \n", "[B]    \n", "[C]    \n", " 1   2 \n", "\n", "move 3 from 1 to 2\n",);

        let (part1, part2) = solve(IStr::new(input.as_bytes())).unwrap();
        assert_eq!(part1, "C");
        assert_eq!(part2, "A");
    }

    #[test]
    fn test_empty_stacks_skipped() {
        let input = concat!("[A] [B]\n", " 1   2 \n", "\n", "move 1 from 1 to 2\n");
        let (part1, part2) = solve(IStr::new(input.as_bytes())).unwrap();
        assert_eq!(part1, "A");
        assert_eq!(part2, "A");
    }

    #[test]
    fn test_errors() {
        let empty = concat!("[A]\n", " 1   2 \n", "\n", "move 2 from 1 to 2\n");
        assert!(solve(IStr::new(empty.as_bytes())).is_err());

        let missing = concat!("[A]\n", " 1 \n", "\n", "move 1 from 1 to 4\n");
        let error = solve(IStr::new(missing.as_bytes())).unwrap_err();
        assert!(format!("{error:#}").contains("no stack numbered 4"));

        let malformed = concat!("[A]\n", " 1 \n", "\n", "shift 1 from 1 to 1\n");
        assert!(solve(IStr::new(malformed.as_bytes())).is_err());

        let trailing = concat!("[A]\n", " 1   2 \n", "\n", "move 1 from 1 to 2 now\n");
        assert!(solve(IStr::new(trailing.as_bytes())).is_err());
    }

    #[test]
    fn test_error_is_located() {
        let input = IStr::new(
            concat!(
                "[A]\n",
                " 1   2 \n",
                "\n",
                "move 1 from 1 to 2\n",
                "move 1 from 1 to 2\n",
            )
            .as_bytes(),
        );

        let error = solve(input).unwrap_err();
        let error = lib::cli::error_context(Path::new("d05.txt"), input, error);
        assert_eq!(error.to_string(), "d05.txt:5:1");
        assert!(format!("{error:#}").contains("stack 1 is empty"));
    }
}
