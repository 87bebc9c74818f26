//! Annotation 섹션 렌더러

use std::io::{self, Write};

use super::util::{write_field, write_text_field};
use crate::model::Annotation;

/// 주석 하나를 출력합니다.
///
/// 항목 사이의 빈 행은 문서 렌더러가 각 항목 뒤에 씁니다.
/// 대상 식별자 태그는 `SPDXREF`(대문자) 철자를 씁니다.
pub fn render_annotation<W: Write + ?Sized>(ann: &Annotation, w: &mut W) -> io::Result<()> {
    if let Some(annotator) = ann.annotator.as_ref().filter(|a| !a.name.is_empty()) {
        writeln!(w, "Annotator: {annotator}")?;
    }
    write_field(w, "AnnotationDate", &ann.date)?;
    write_field(w, "AnnotationType", &ann.annotation_type)?;
    write_field(w, "SPDXREF", &ann.spdx_identifier)?;
    write_text_field(w, "AnnotationComment", &ann.comment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CreatorType, Identity};

    fn render(ann: &Annotation) -> String {
        let mut buf = Vec::new();
        render_annotation(ann, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_all_fields_in_order() {
        let ann = Annotation {
            annotator: Some(Identity::new(CreatorType::Person, "John Doe")),
            date: "2018-10-10T17:52:00Z".to_owned(),
            annotation_type: "REVIEW".to_owned(),
            spdx_identifier: "SPDXRef-DOCUMENT".to_owned(),
            comment: "This is an annotation about the SPDX document".to_owned(),
        };

        let want = "Annotator: Person: John Doe
AnnotationDate: 2018-10-10T17:52:00Z
AnnotationType: REVIEW
SPDXREF: SPDXRef-DOCUMENT
AnnotationComment: This is an annotation about the SPDX document
";
        assert_eq!(render(&ann), want);
    }

    #[test]
    fn tool_annotator() {
        let ann = Annotation {
            annotator: Some(Identity::new(CreatorType::Tool, "magictool-1.1")),
            ..Annotation::default()
        };
        assert_eq!(render(&ann), "Annotator: Tool: magictool-1.1\n");
    }

    #[test]
    fn missing_annotator_is_omitted() {
        let ann = Annotation {
            annotation_type: "OTHER".to_owned(),
            ..Annotation::default()
        };
        assert_eq!(render(&ann), "AnnotationType: OTHER\n");
    }
}
