use lib::prelude::*;

lib::entry!("d03.txt", solve);

/// Number of rucksacks carried by a group of elves.
const GROUP: usize = 3;

fn solve(input: IStr) -> Result<(u32, u32)> {
    let rucksacks = input
        .lines(Trim::Both)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    let mut part1 = 0;

    for sack in &rucksacks {
        let (a, b) = sack.as_data().split_at(sack.len() / 2);
        let common = items(a)? & items(b)?;
        debug!("{}: {}", sack.as_bstr(), describe(common));
        part1 += priorities(common);
    }

    let mut part2 = 0;

    for (n, group) in chunker(&rucksacks, GROUP, Grouping::Distinct).enumerate() {
        let mut common = u64::MAX;

        for sack in group {
            common &= items(sack.as_data())?;
        }

        debug!("group {}: {}", n + 1, describe(common));
        part2 += priorities(common);
    }

    Ok((part1, part2))
}

/// Priority of an item type.
const fn priority(item: u8) -> Option<u32> {
    match item {
        b'a'..=b'z' => Some((item - b'a') as u32 + 1),
        b'A'..=b'Z' => Some((item - b'A') as u32 + 27),
        _ => None,
    }
}

/// Set of item types in a compartment, with each priority as a bit.
fn items(compartment: &[u8]) -> Result<u64> {
    let mut set = 0;

    for &item in compartment {
        let priority =
            priority(item).with_context(|| anyhow!("bad item type `{}`", item.escape_ascii()))?;
        set |= 1 << priority;
    }

    Ok(set)
}

/// Sum the priorities in a set of item types.
fn priorities(mut set: u64) -> u32 {
    let mut sum = 0;

    while set != 0 {
        sum += set.trailing_zeros();
        set &= set - 1;
    }

    sum
}

fn describe(set: u64) -> String {
    (b'a'..=b'z')
        .chain(b'A'..=b'Z')
        .filter(|&item| priority(item).is_some_and(|p| set & (1 << p) != 0))
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn test_sample() {
        assert_eq!(solve(IStr::new(SAMPLE.as_bytes())).unwrap(), (157, 70));
    }

    #[test]
    fn test_priority() {
        assert_eq!(priority(b'a'), Some(1));
        assert_eq!(priority(b'z'), Some(26));
        assert_eq!(priority(b'A'), Some(27));
        assert_eq!(priority(b'Z'), Some(52));
        assert_eq!(priority(b'1'), None);
    }

    #[test]
    fn test_all_common_items_count() {
        // Both `a` and `B` are shared by the compartments and by the group.
        assert_eq!(solve(IStr::new(b"aBaB\n")).unwrap(), (29, 29));
    }

    #[test]
    fn test_short_group() {
        let input = IStr::new(b"abac\nadae\nafag\nxyxz\n");
        assert_eq!(solve(input).unwrap(), (1 + 1 + 1 + 24, 1 + 24 + 25 + 26));
    }

    #[test]
    fn test_bad_item() {
        let error = solve(IStr::new(b"ab-b\n")).unwrap_err();
        assert!(error.to_string().contains("bad item type `-`"));
    }
}
