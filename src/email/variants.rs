//! Parameter sets for each delivery variant

use super::templates;
use crate::config::SchoolProfile;
use crate::domain::{CredentialRecord, TemplateParams, Variant};

/// Build the parameters `variant` sends for `record`
pub fn build_params(
    variant: Variant,
    record: &CredentialRecord,
    school: &SchoolProfile,
) -> TemplateParams {
    match variant {
        Variant::Direct => direct_params(record, school),
        Variant::Simple => simple_params(record, school),
        Variant::FullTemplate => full_template_params(record, school),
    }
}

fn direct_params(record: &CredentialRecord, school: &SchoolProfile) -> TemplateParams {
    TemplateParams {
        to_name: record.teacher_name.clone(),
        to_email: record.teacher_email.clone(),
        from_name: school.name.clone(),
        reply_to: Some(school.email.clone()),
        subject: templates::SHORT_SUBJECT.to_string(),
        message: templates::direct_body(record, school),
        teacher_name: Some(record.teacher_name.clone()),
        access_id: Some(record.access_id.clone()),
        username: Some(record.username.clone()),
        password: Some(record.password.clone()),
        portal_url: Some(school.portal_url.clone()),
        ..Default::default()
    }
}

fn simple_params(record: &CredentialRecord, school: &SchoolProfile) -> TemplateParams {
    TemplateParams {
        to_name: record.teacher_name.clone(),
        to_email: record.teacher_email.clone(),
        from_name: school.name.clone(),
        reply_to: Some(record.teacher_email.clone()),
        subject: templates::SHORT_SUBJECT.to_string(),
        message: templates::simple_body(record, school),
        ..Default::default()
    }
}

fn full_template_params(record: &CredentialRecord, school: &SchoolProfile) -> TemplateParams {
    TemplateParams {
        to_name: record.teacher_name.clone(),
        to_email: record.teacher_email.clone(),
        from_name: school.name.clone(),
        from_email: Some(school.email.clone()),
        subject: templates::full_subject(school),
        message: templates::full_body(record, school),
        access_id: Some(record.access_id.clone()),
        username: Some(record.username.clone()),
        password: Some(record.password.clone()),
        portal_url: Some(school.portal_url.clone()),
        ..Default::default()
    }
}
