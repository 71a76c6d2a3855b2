use super::{ErrorKind, IStr, Split, Trim, W};

#[test]
fn test_lines_keep_indentation() {
    let input = IStr::new(b"    [D]    \n[N] [C]    \r\n\nmove 1 from 2 to 1");

    let lines = input
        .lines(Trim::Keep)
        .map(|line| line.as_data())
        .collect::<Vec<_>>();

    assert_eq!(
        lines,
        [
            &b"    [D]    "[..],
            &b"[N] [C]    "[..],
            &b""[..],
            &b"move 1 from 2 to 1"[..]
        ]
    );
}

#[test]
fn test_lines_track_index() {
    let input = IStr::new(b"abc\n  de  \nf\n");
    let lines = input.lines(Trim::Both).collect::<Vec<_>>();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].index(), 0);
    assert_eq!(lines[1].index(), 6);
    assert_eq!(lines[1].as_data(), b"de");
    assert_eq!(lines[2].index(), 11);
}

#[test]
fn test_words_and_integers() {
    let mut input = IStr::new(b"move 13 from 2 to 9\n");

    let (W(m), count, W(from), a, W(to), b) =
        input.next::<(W<&str>, usize, W<&str>, usize, W<&str>, usize)>().unwrap();

    assert_eq!((m, count, from, a, to, b), ("move", 13, "from", 2, "to", 9));
}

#[test]
fn test_not_integer() {
    let mut input = IStr::new(b"12 abc");
    assert_eq!(input.next::<u32>().unwrap(), 12);

    let error = input.next::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("abc")));
    assert_eq!(error.span(), 3..6);
}

#[test]
fn test_split_array() {
    let mut input = IStr::new(b"1-2-3");
    let Split([a, b, c]) = input.next::<Split<'-', [u8; 3]>>().unwrap();
    assert_eq!((a, b, c), (1, 2, 3));
}

#[test]
fn test_try_line_blank() {
    let mut input = IStr::new(b"1000\n\n2000\n");

    assert_eq!(input.try_line::<Option<u32>>().unwrap(), Some(Some(1000)));
    assert_eq!(input.try_line::<Option<u32>>().unwrap(), Some(None));
    assert_eq!(input.try_line::<Option<u32>>().unwrap(), Some(Some(2000)));
    assert_eq!(input.try_line::<Option<u32>>().unwrap(), None);
}

#[test]
fn test_parse_rejects_trailing() {
    let mut rest = IStr::new(b"xx 2-4,6-8,1-1");
    rest.next::<W<&str>>().unwrap();

    let error = rest.parse::<Split<',', [Split<'-', (u32, u32)>; 2]>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::Trailing));
    assert_eq!(error.span(), 11..14);

    assert!(IStr::new(b"A Y Z").parse::<(W<&str>, W<&str>)>().is_err());
    assert!(IStr::new(b"A Y  ").parse::<(W<&str>, W<&str>)>().is_ok());
}
