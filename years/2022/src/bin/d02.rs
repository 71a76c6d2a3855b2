use lib::prelude::*;

lib::entry!("d02.txt", solve);

fn solve(input: IStr) -> Result<(u32, u32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    for line in input.lines(Trim::Both).filter(|line| !line.is_empty()) {
        let (Opponent(them), code) = line.parse::<(Opponent, Code)>()?;

        let me = code.shape();
        let outcome = me.against(them);
        part1 += me.value() + outcome.value();
        debug!("{me:?} vs {them:?} = {outcome:?} (running total: {part1})");

        let wanted = code.outcome();
        let me = them.for_outcome(wanted);
        part2 += me.value() + wanted.value();
        debug!("{me:?} vs {them:?} = {wanted:?} (running total: {part2})");
    }

    Ok((part1, part2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    /// Score for playing this shape.
    const fn value(self) -> u32 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The shape this one defeats.
    const fn beats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape which defeats this one.
    const fn beaten_by(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }

    /// Outcome of playing this shape against `other`.
    fn against(self, other: Shape) -> Outcome {
        if self == other {
            Outcome::Draw
        } else if self.beats() == other {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// The shape to play against this one to get the given outcome.
    const fn for_outcome(self, outcome: Outcome) -> Shape {
        match outcome {
            Outcome::Lose => self.beats(),
            Outcome::Draw => self,
            Outcome::Win => self.beaten_by(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    const fn value(self) -> u32 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

/// Opponent column of the strategy guide.
struct Opponent(Shape);

lib::from_input! {
    |W(code): W<&'static str>| -> Opponent {
        Ok(Opponent(match code {
            "A" => Shape::Rock,
            "B" => Shape::Paper,
            "C" => Shape::Scissors,
            other => bail!("unknown opponent move `{other}`"),
        }))
    }
}

/// Second column of the strategy guide, whose meaning differs between the
/// two parts.
#[derive(Debug, Clone, Copy)]
enum Code {
    X,
    Y,
    Z,
}

impl Code {
    /// Interpreted as the shape to play.
    const fn shape(self) -> Shape {
        match self {
            Code::X => Shape::Rock,
            Code::Y => Shape::Paper,
            Code::Z => Shape::Scissors,
        }
    }

    /// Interpreted as the outcome to aim for.
    const fn outcome(self) -> Outcome {
        match self {
            Code::X => Outcome::Lose,
            Code::Y => Outcome::Draw,
            Code::Z => Outcome::Win,
        }
    }
}

lib::from_input! {
    |W(code): W<&'static str>| -> Code {
        Ok(match code {
            "X" => Code::X,
            "Y" => Code::Y,
            "Z" => Code::Z,
            other => bail!("unknown response `{other}`"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        assert_eq!(solve(IStr::new(b"A Y\nB X\nC Z\n")).unwrap(), (15, 12));
    }

    #[test]
    fn test_tables() {
        for a in [Shape::Rock, Shape::Paper, Shape::Scissors] {
            assert_eq!(a.against(a), Outcome::Draw);
            assert_eq!(a.against(a.beats()), Outcome::Win);
            assert_eq!(a.against(a.beaten_by()), Outcome::Lose);
            assert_eq!(a.beats().beaten_by(), a);

            for outcome in [Outcome::Lose, Outcome::Draw, Outcome::Win] {
                assert_eq!(a.for_outcome(outcome).against(a), outcome);
            }
        }
    }

    #[test]
    fn test_unknown_codes() {
        let error = solve(IStr::new(b"A Y\nD X\n")).unwrap_err();
        assert!(format!("{error:#}").contains("unknown opponent move `D`"));
        assert!(solve(IStr::new(b"A W\n")).is_err());
        assert!(solve(IStr::new(b"A\n")).is_err());
        assert!(solve(IStr::new(b"A Y Z\n")).is_err());
    }
}
