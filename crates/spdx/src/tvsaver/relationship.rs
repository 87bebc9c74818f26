//! Relationship 섹션 렌더러

use std::io::{self, Write};

use super::util::write_text_field;
use crate::model::Relationship;

/// 관계 하나를 출력합니다.
///
/// 개별 관계 뒤에는 빈 행을 쓰지 않습니다. 섹션 전체 뒤의 빈 행은 문서
/// 렌더러가 씁니다. 세 요소 중 하나라도 비어 있으면 `Relationship` 행을
/// 생략합니다.
pub fn render_relationship<W: Write + ?Sized>(rln: &Relationship, w: &mut W) -> io::Result<()> {
    if !rln.ref_a.is_empty() && !rln.relationship.is_empty() && !rln.ref_b.is_empty() {
        writeln!(
            w,
            "Relationship: {} {} {}",
            rln.ref_a, rln.relationship, rln.ref_b
        )?;
    }
    write_text_field(w, "RelationshipComment", &rln.comment)
}
