//! tag-value 출력 공용 헬퍼
//!
//! 텍스트 블록 이스케이프와 `Key: Value` 행 출력 규칙을 모아둡니다.

use std::borrow::Cow;
use std::io::{self, Write};

/// 텍스트 블록 시작 표식
pub const TEXT_START: &str = "<text>";
/// 텍스트 블록 끝 표식
pub const TEXT_END: &str = "</text>";

/// 자유 텍스트 값을 tag-value에 넣을 수 있는 형태로 변환합니다.
///
/// 줄바꿈이 있으면 `<text>`와 `</text>`로 감싸고, 한 줄이면 그대로 반환합니다.
/// 값 안에 표식 문자열이 들어 있어도 추가로 이스케이프하지 않습니다.
/// 식별자, 열거값, 날짜 같은 구조적 단일 토큰에는 적용하지 않습니다.
pub fn textify(s: &str) -> Cow<'_, str> {
    if s.contains('\n') {
        Cow::Owned(format!("{TEXT_START}{s}{TEXT_END}"))
    } else {
        Cow::Borrowed(s)
    }
}

/// 값이 비어 있지 않으면 `key: value` 행을 씁니다.
pub(crate) fn write_field<W: Write + ?Sized>(w: &mut W, key: &str, value: &str) -> io::Result<()> {
    if !value.is_empty() {
        writeln!(w, "{key}: {value}")?;
    }
    Ok(())
}

/// 자유 텍스트 필드용. 값이 비어 있지 않으면 [`textify`]를 거쳐 씁니다.
pub(crate) fn write_text_field<W: Write + ?Sized>(
    w: &mut W,
    key: &str,
    value: &str,
) -> io::Result<()> {
    if !value.is_empty() {
        writeln!(w, "{key}: {}", textify(value))?;
    }
    Ok(())
}

/// 반복 필드를 저장 순서대로 한 행씩 씁니다.
pub(crate) fn write_repeated<W: Write + ?Sized>(
    w: &mut W,
    key: &str,
    values: &[String],
) -> io::Result<()> {
    for value in values {
        writeln!(w, "{key}: {value}")?;
    }
    Ok(())
}

/// 섹션 구분용 빈 행
pub(crate) fn write_blank<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn textify_single_line_is_unchanged() {
        let out = textify("GPL-2.0-only");
        assert_eq!(out, "GPL-2.0-only");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn textify_multi_line_is_wrapped() {
        assert_eq!(
            textify("line one\nline two"),
            "<text>line one\nline two</text>"
        );
    }

    #[test]
    fn textify_trailing_newline_still_wraps() {
        assert_eq!(textify("only\n"), "<text>only\n</text>");
    }

    #[test]
    fn textify_marker_literal_is_not_escaped() {
        // 한 줄짜리 표식 문자열은 그대로 통과
        assert_eq!(textify("</text>"), "</text>");
        assert_eq!(textify("<text>"), "<text>");
        // 여러 줄이면 표식이 중첩되어도 그대로 감쌀 뿐입니다
        assert_eq!(
            textify("a</text>\nb"),
            "<text>a</text>\nb</text>"
        );
    }

    #[test]
    fn textify_empty_string() {
        assert_eq!(textify(""), "");
    }

    #[test]
    fn write_field_skips_empty() {
        assert_eq!(collect(|w| write_field(w, "PackageVersion", "")), "");
        assert_eq!(
            collect(|w| write_field(w, "PackageVersion", "4.19")),
            "PackageVersion: 4.19\n"
        );
    }

    #[test]
    fn write_text_field_wraps_multi_line() {
        assert_eq!(
            collect(|w| write_text_field(w, "FileComment", "a\nb")),
            "FileComment: <text>a\nb</text>\n"
        );
        assert_eq!(collect(|w| write_text_field(w, "FileComment", "")), "");
    }

    #[test]
    fn write_repeated_preserves_order() {
        let values = vec!["b".to_owned(), "a".to_owned(), "c".to_owned()];
        assert_eq!(
            collect(|w| write_repeated(w, "FileType", &values)),
            "FileType: b\nFileType: a\nFileType: c\n"
        );
    }
}
