use lib::prelude::*;

lib::entry!("d04.txt", solve);

fn solve(input: IStr) -> Result<(u32, u32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    for line in input.lines(Trim::Both).filter(|line| !line.is_empty()) {
        let Split([a, b]) = line.parse::<Split<',', [Assignment; 2]>>()?;

        let contained = a.contains(&b) || b.contains(&a);
        let overlapping = a.overlaps(&b);
        debug!("{a:?} {b:?}: contained = {contained}, overlapping = {overlapping}");

        part1 += u32::from(contained);
        part2 += u32::from(overlapping);
    }

    Ok((part1, part2))
}

/// An inclusive range of section ids.
#[derive(Debug, Clone, Copy)]
struct Assignment {
    start: u32,
    end: u32,
}

impl Assignment {
    fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

lib::from_input! {
    |Split((a, b)): Split<'-', (u32, u32)>| -> Assignment {
        Ok(Assignment { start: a.min(b), end: a.max(b) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve(IStr::new(SAMPLE.as_bytes())).unwrap(), (2, 4));
    }

    #[test]
    fn test_reversed_bounds() {
        assert_eq!(solve(IStr::new(b"8-2,7-3\n")).unwrap(), (1, 1));
    }

    #[test]
    fn test_identical() {
        assert_eq!(solve(IStr::new(b"3-3,3-3\n")).unwrap(), (1, 1));
    }

    #[test]
    fn test_malformed() {
        assert!(solve(IStr::new(b"2-4;6-8\n")).is_err());
        assert!(solve(IStr::new(b"2-x,6-8\n")).is_err());
        assert!(solve(IStr::new(b"2-4,6-8,1-1\n")).is_err());
    }
}
