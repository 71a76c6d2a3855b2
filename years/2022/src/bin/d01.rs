use lib::prelude::*;

lib::entry!("d01.txt", solve);

/// Number of elves whose calories are combined for the second answer.
const TOP: usize = 3;

fn solve(input: IStr) -> Result<(u32, u32)> {
    let elves = calories(input)?;
    let top = top_elves(&elves);

    for (rank, (elf, kcal)) in top.iter().enumerate() {
        info!("#{}: elf {} brought {kcal} calories", rank + 1, elf + 1);
    }

    let part1 = top.first().map(|&(_, kcal)| kcal).context("no elves")?;

    let part2 = top
        .iter()
        .try_fold(0u32, |sum, &(_, kcal)| sum.checked_add(kcal))
        .context("calorie overflow")?;

    info!("the top {} brought {part2}", top.len());
    Ok((part1, part2))
}

/// Sum the calories carried by each elf, where elves are separated by blank
/// lines.
fn calories(input: IStr) -> Result<Vec<u32>> {
    let mut elves = Vec::new();
    let mut current = None::<u32>;

    for line in input.lines(Trim::Both) {
        let Some(kcal) = line.parse::<Option<u32>>()? else {
            elves.extend(current.take());
            continue;
        };

        let sum = current.get_or_insert(0);
        *sum = sum.checked_add(kcal).context("calorie overflow")?;
    }

    elves.extend(current);
    Ok(elves)
}

/// Elves carrying the most calories as `(elf, calories)`, most first. Ties
/// are ranked in input order.
fn top_elves(elves: &[u32]) -> ArrayVec<(usize, u32), TOP> {
    let mut top = ArrayVec::<(usize, u32), TOP>::new();

    for (elf, &kcal) in elves.iter().enumerate() {
        let at = top
            .iter()
            .position(|&(_, best)| kcal > best)
            .unwrap_or(top.len());

        if at == TOP {
            continue;
        }

        if top.is_full() {
            top.pop();
        }

        top.insert(at, (elf, kcal));
    }

    top
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve(IStr::new(SAMPLE.as_bytes())).unwrap(), (24000, 45000));
    }

    #[test]
    fn test_groups() {
        let input = IStr::new(b"1\n2\n\n\n3\r\n\r\n4\n5");
        assert_eq!(calories(input).unwrap(), [3, 3, 9]);
    }

    #[test]
    fn test_top_elves() {
        let top = top_elves(&[5, 9, 1, 9, 7, 3]);
        assert_eq!(top.as_slice(), [(1, 9), (3, 9), (4, 7)]);
        assert!(top_elves(&[]).is_empty());
    }

    #[test]
    fn test_fewer_than_top() {
        assert_eq!(solve(IStr::new(b"5\n\n7\n")).unwrap(), (7, 12));
    }

    #[test]
    fn test_top_sum_overflow() {
        let error = solve(IStr::new(b"4000000000\n\n4000000000\n")).unwrap_err();
        assert!(error.to_string().contains("calorie overflow"));
    }

    #[test]
    fn test_errors() {
        assert!(solve(IStr::new(b"")).is_err());
        assert!(solve(IStr::new(b"100\nlots\n")).is_err());
        assert!(solve(IStr::new(b"100 200\n")).is_err());
    }
}
