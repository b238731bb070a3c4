use grvtree::parser::{ByteParser, ParsingErrorType};

const DELIMITERS: &[u8] = b"() \n\t\r";

#[test]
fn test_peek_and_consume() {
    let mut parser = ByteParser::for_str("(S)");
    assert_eq!(parser.peek(), Some(b'('));
    assert!(parser.peek_is(b'('));
    assert!(!parser.consume_if(b')'));
    assert!(parser.consume_if(b'('));
    assert_eq!(parser.position(), 1);
    assert_eq!(parser.next_byte(), Some(b'S'));
    assert_eq!(parser.next_byte(), Some(b')'));
    assert!(parser.is_eof());
    assert_eq!(parser.peek(), None);
    assert_eq!(parser.next_byte(), None);
}

#[test]
fn test_skip_whitespace() {
    let mut parser = ByteParser::for_str(" \t\r\n x ");
    parser.skip_whitespace();
    assert_eq!(parser.position(), 5);
    assert!(parser.peek_is(b'x'));
}

#[test]
fn test_parse_token() {
    let mut parser = ByteParser::for_str("NP-SBJ(PRO そこ)");
    assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "NP-SBJ");
    assert!(parser.consume_if(b'('));
    assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "PRO");
    parser.skip_whitespace();
    assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "そこ");
    assert!(parser.peek_is(b')'));

    // Sitting on a delimiter yields an empty token
    assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "");
}

#[test]
fn test_parse_token_until_eof() {
    let mut parser = ByteParser::for_str("ます");
    assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "ます");
    assert!(parser.is_eof());
}

#[test]
fn test_parse_token_invalid_utf8() {
    let mut parser = ByteParser::for_bytes(b"\xe3\x81 x");
    let err = parser.parse_token(DELIMITERS).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::InvalidUtf8);
}

#[test]
fn test_context() {
    let parser = ByteParser::for_str("(S (NN x))");
    assert_eq!(parser.get_context_as_string(4), "(S (");
    assert_eq!(parser.get_context_as_string(100), "(S (NN x))");

    // Cut inside a multi-byte character
    let parser = ByteParser::for_str("そこ");
    assert_eq!(parser.get_context_as_string(4), "そ\u{FFFD}");
}
