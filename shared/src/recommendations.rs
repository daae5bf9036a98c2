use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::request::Domain;

/// Verdict category reported by the text analyzer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, AsRefStr, EnumIter,
)]
pub enum Category {
    Fake,
    #[default]
    Suspicious,
    Genuine,
}

impl Category {
    /// Unrecognized tags are treated as `Suspicious`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

const FAKE: [&str; 6] = [
    "🚫 DO NOT proceed with this opportunity under any circumstances",
    "🚫 DO NOT share personal information, financial details, or make any payments",
    "📞 Report this posting to the platform administrators immediately",
    "🔍 Search for similar scam reports online using the company name",
    "⚠️ Block and avoid all further communication with this poster",
    "👥 Warn others in your network about this scam",
];

const SUSPICIOUS: [&str; 7] = [
    "⚠️ Proceed with extreme caution and verify all information independently",
    "🔍 Thoroughly verify company registration, address, and legitimacy through official sources",
    "📧 Confirm all communication happens through verified official company channels only",
    "💳 Never make upfront payments for jobs, training, or equipment",
    "👥 Research company reviews, employee feedback, and ratings on multiple platforms",
    "🤝 Request detailed written contract and verify terms before proceeding",
    "📞 Contact the company directly through their official website contact information",
];

const GENUINE: [&str; 6] = [
    "✅ Posting appears legitimate with professional content and credibility indicators",
    "🔍 Still verify company details independently as standard best practice",
    "📝 Carefully review all employment terms, benefits, and responsibilities",
    "💼 Confirm role details, reporting structure, and expectations in writing",
    "🤝 Ensure all communication happens through official company channels",
    "📋 Request and review employment contract before accepting any offer",
];

const JOB_GENUINE: [&str; 6] = [
    "✅ Job posting shows professional characteristics",
    "🔍 Verify company details through official website",
    "📝 Review employment contract carefully before signing",
    "🤝 Confirm communication through official channels",
    "💼 Check company reviews and employee feedback",
    "📞 Verify job posting through company HR department",
];

const JOB_FRAUDULENT: [&str; 6] = [
    "🚫 DO NOT proceed with this job opportunity",
    "🚫 DO NOT share personal or financial information",
    "⚠️ Multiple fraud indicators detected",
    "📞 Report this posting to platform administrators",
    "🔍 Search for scam reports about this company",
    "👥 Warn your network about this fraudulent posting",
];

const INTERNSHIP_GENUINE: [&str; 7] = [
    "✅ Internship offer shows legitimate characteristics",
    "🔍 Verify offer through company's official careers page",
    "📧 Confirm all communication via official company email",
    "📝 Review internship agreement thoroughly",
    "👥 Research company reviews and intern experiences",
    "🎓 Check if internship aligns with your academic goals",
    "⚠️ Never pay registration or training fees",
];

const INTERNSHIP_FRAUDULENT: [&str; 7] = [
    "🚫 DO NOT proceed with this internship offer",
    "🚫 DO NOT make any payments or share financial details",
    "⚠️ Multiple fraud indicators detected in this offer",
    "📞 Report to your college placement cell immediately",
    "🔍 Search online for scam reports about this company",
    "👥 Warn fellow students about this fraudulent offer",
    "🎓 Seek internships through verified college programs",
];

pub fn for_category(category: Category) -> &'static [&'static str] {
    match category {
        Category::Fake => &FAKE,
        Category::Suspicious => &SUSPICIOUS,
        Category::Genuine => &GENUINE,
    }
}

pub fn for_tag(tag: &str) -> &'static [&'static str] {
    for_category(Category::from_tag(tag))
}

/// Two-valued selection used by the ensemble reports.
pub fn for_verdict(domain: Domain, is_real: bool) -> &'static [&'static str] {
    match (domain, is_real) {
        (Domain::Job, true) => &JOB_GENUINE,
        (Domain::Job, false) => &JOB_FRAUDULENT,
        (Domain::Internship, true) => &INTERNSHIP_GENUINE,
        (Domain::Internship, false) => &INTERNSHIP_FRAUDULENT,
    }
}
