use lib::prelude::*;

lib::entry!("d06.txt", solve);

/// Window size of a start-of-packet marker.
const PACKET: usize = 4;
/// Window size of a start-of-message marker.
const MESSAGE: usize = 14;

fn solve(input: IStr) -> Result<(Option<usize>, Option<usize>)> {
    let mut answer = None;

    for (n, line) in input
        .lines(Trim::Both)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let packet = marker(line.as_data(), PACKET);
        let message = marker(line.as_data(), MESSAGE);
        info!("stream {}: packet marker at {packet:?}, message marker at {message:?}", n + 1);
        answer.get_or_insert((packet, message));
    }

    answer.context("no datastream in input")
}

/// Number of characters processed once the first window of `size` distinct
/// characters has been received.
fn marker(stream: &[u8], size: usize) -> Option<usize> {
    let position = chunker(stream, size, Grouping::Sliding)
        .position(|window| window.len() == size && distinct(window))?;

    Some(position + size)
}

fn distinct(window: &[u8]) -> bool {
    let mut seen = [0u64; 4];

    for &b in window {
        let (word, bit) = (usize::from(b >> 6), 1u64 << (b & 0b11_1111));

        if seen[word] & bit != 0 {
            return false;
        }

        seen[word] |= bit;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples() {
        let samples = [
            ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
            ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
        ];

        for (stream, packet, message) in samples {
            assert_eq!(marker(stream.as_bytes(), PACKET), Some(packet), "{stream}");
            assert_eq!(marker(stream.as_bytes(), MESSAGE), Some(message), "{stream}");
        }
    }

    #[test]
    fn test_first_stream_answers() {
        let input = IStr::new(b"\nbvwbjplbgvbhsrlpgdmjqwftvncz\nmjqjpqmgbljsphdztnvjfqwrcgsmlb\n");
        assert_eq!(solve(input).unwrap(), (Some(5), Some(23)));
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(marker(b"aab", PACKET), None);
        assert_eq!(marker(b"abcabcabcabc", PACKET), None);
        assert_eq!(marker(b"abcd", PACKET), Some(4));
        assert_eq!(solve(IStr::new(b"abab\n")).unwrap(), (None, None));
    }

    #[test]
    fn test_distinct() {
        assert!(distinct(b"abcd"));
        assert!(!distinct(b"abca"));
        assert!(distinct(&[0, 64, 128, 192]));
        assert!(!distinct(&[255, 1, 255]));
    }
}
