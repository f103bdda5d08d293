//! The benefits-template catalog: three canonical HTML bodies and the
//! course-code assignment table that decides which body each course receives.
//!
//! This is configuration data, not logic. The template bodies are inserted
//! verbatim, `benefitsHtml:` field name included, so the indentation inside
//! the constants is load-bearing.

/// Benefits body for international certificate courses (ICDL, MOS, IC3, ...).
pub const CERTIFICATE_BENEFITS: &str = r##"benefitsHtml: `<div style="line-height: 1.6;">
      <div style="background: linear-gradient(to right, #f0f9ff, #e0f2fe); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #0284c7;">
        <p style="margin: 0; font-size: 13px; color: #0c4a6e;"><strong>Chứng chỉ quốc tế:</strong> Được công nhận tại 150+ quốc gia</p>
      </div>
      <div style="background: linear-gradient(to right, #f0fdf4, #dcfce7); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #16a34a;">
        <p style="margin: 0; font-size: 13px; color: #14532d;"><strong>Học phí ưu đãi:</strong> Bao gồm lệ phí thi chứng chỉ</p>
      </div>
      <div style="background: linear-gradient(to right, #fef3c7, #fde68a); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #ca8a04;">
        <p style="margin: 0; font-size: 13px; color: #713f12;"><strong>Tài liệu:</strong> Giáo trình chuẩn quốc tế</p>
      </div>
      <div style="background: linear-gradient(to right, #fce7f3, #fbcfe8); padding: 12px; border-radius: 8px; border-left: 3px solid #be185d;">
        <p style="margin: 0; font-size: 13px; color: #831843;"><strong>Hỗ trợ:</strong> Tư vấn miễn phí sau khóa học</p>
      </div>
    </div>`"##;

/// Benefits body for soft-skills courses (KNM-*).
pub const SOFT_SKILLS_BENEFITS: &str = r##"benefitsHtml: `<div style="line-height: 1.6;">
      <div style="background: linear-gradient(to right, #f0f9ff, #e0f2fe); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #0284c7;">
        <p style="margin: 0; font-size: 13px; color: #0c4a6e;"><strong>Chứng nhận:</strong> Chứng chỉ hoàn thành khóa học</p>
      </div>
      <div style="background: linear-gradient(to right, #f0fdf4, #dcfce7); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #16a34a;">
        <p style="margin: 0; font-size: 13px; color: #14532d;"><strong>Thực hành:</strong> 70% thời lượng thực hành</p>
      </div>
      <div style="background: linear-gradient(to right, #fef3c7, #fde68a); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #ca8a04;">
        <p style="margin: 0; font-size: 13px; color: #713f12;"><strong>Tài liệu:</strong> Tài liệu học tập đầy đủ</p>
      </div>
      <div style="background: linear-gradient(to right, #fce7f3, #fbcfe8); padding: 12px; border-radius: 8px; border-left: 3px solid #be185d;">
        <p style="margin: 0; font-size: 13px; color: #831843;"><strong>Cộng đồng:</strong> Tham gia nhóm học tập</p>
      </div>
    </div>`"##;

/// Benefits body for technology and applied-software courses.
pub const TECHNOLOGY_BENEFITS: &str = r##"benefitsHtml: `<div style="line-height: 1.6;">
      <div style="background: linear-gradient(to right, #f0f9ff, #e0f2fe); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #0284c7;">
        <p style="margin: 0; font-size: 13px; color: #0c4a6e;"><strong>Chứng nhận:</strong> Chứng chỉ hoàn thành từ VITC</p>
      </div>
      <div style="background: linear-gradient(to right, #f0fdf4, #dcfce7); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #16a34a;">
        <p style="margin: 0; font-size: 13px; color: #14532d;"><strong>Dự án thực tế:</strong> Thực hành với dự án thực tế</p>
      </div>
      <div style="background: linear-gradient(to right, #fef3c7, #fde68a); padding: 12px; border-radius: 8px; margin-bottom: 10px; border-left: 3px solid #ca8a04;">
        <p style="margin: 0; font-size: 13px; color: #713f12;"><strong>Công cụ:</strong> Phần mềm & tài liệu chuyên sâu</p>
      </div>
      <div style="background: linear-gradient(to right, #fce7f3, #fbcfe8); padding: 12px; border-radius: 8px; border-left: 3px solid #be185d;">
        <p style="margin: 0; font-size: 13px; color: #831843;"><strong>Tư vấn:</strong> Hỗ trợ học tập 1-1</p>
      </div>
    </div>`"##;

/// The three benefit content categories a course can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitCategory {
    /// International certificate preparation courses.
    Certificate,
    /// Soft-skills training courses.
    SoftSkills,
    /// Technology / applied-software courses. Also the fallback for courses
    /// without an explicit assignment.
    Technology,
}

impl BenefitCategory {
    /// The canonical template body for this category.
    pub fn template(self) -> &'static str {
        match self {
            Self::Certificate => CERTIFICATE_BENEFITS,
            Self::SoftSkills => SOFT_SKILLS_BENEFITS,
            Self::Technology => TECHNOLOGY_BENEFITS,
        }
    }

    /// Short machine-readable name, used in listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::SoftSkills => "soft-skills",
            Self::Technology => "technology",
        }
    }
}

/// Course code → category assignments, in application order.
///
/// The trailing five codes had no explicit assignment in the upstream catalog
/// and default to [`BenefitCategory::Technology`].
pub const ASSIGNMENTS: &[(&str, BenefitCategory)] = &[
    ("ICDL-2025", BenefitCategory::Certificate),
    ("UDCNTT-COBAN-2025", BenefitCategory::Certificate),
    ("UDCNTT-NANGCAO-2025", BenefitCategory::Certificate),
    ("IC3-2025", BenefitCategory::Certificate),
    ("MOS-2025", BenefitCategory::Certificate),
    ("MOS-QUOCTE-2025", BenefitCategory::Certificate),
    ("CNTT-DAURA-2025", BenefitCategory::Certificate),
    ("KNM-GIAOTIEP-2025", BenefitCategory::SoftSkills),
    ("KNM-TEAMWORK-2025", BenefitCategory::SoftSkills),
    ("KNM-BANTHAN-2025", BenefitCategory::SoftSkills),
    ("KNM-VIECLAM-2025", BenefitCategory::SoftSkills),
    ("KNM-LANHDAO-2025", BenefitCategory::SoftSkills),
    ("KNM-QUOCTE-2025", BenefitCategory::SoftSkills),
    ("KNM-CV-2025", BenefitCategory::SoftSkills),
    ("SEO-MARKETING-2025", BenefitCategory::Technology),
    ("EXCEL-SPSS-R-2025", BenefitCategory::Technology),
    ("EXCEL-KETOAN-2025", BenefitCategory::Technology),
    ("ARCGIS-WEBGIS-2025", BenefitCategory::Technology),
    ("MICROSTATION-2025", BenefitCategory::Technology),
    ("LAPTRINH-WEB-2025", BenefitCategory::Technology),
    ("PYTHON-COBAN-2025", BenefitCategory::Technology),
    ("MARKETING-COBAN-2025", BenefitCategory::Technology),
    ("AUTOCAD-2025", BenefitCategory::Technology),
    ("REVIT-2025", BenefitCategory::Technology),
    ("SKETCHUP-2025", BenefitCategory::Technology),
];

/// Looks up the assigned category for a course code.
pub fn category_for(course_code: &str) -> Option<BenefitCategory> {
    ASSIGNMENTS
        .iter()
        .find(|(code, _)| *code == course_code)
        .map(|(_, category)| *category)
}
