//! Message texts for credential emails
//!
//! Each delivery variant carries its own body; the full body doubles as the
//! text of the manual-compose surface.

use crate::config::SchoolProfile;
use crate::domain::CredentialRecord;

/// Subject used by the direct and simple variants
pub const SHORT_SUBJECT: &str = "Your Teacher Portal Login Credentials";

/// Subject used by the full template and the manual surface
pub fn full_subject(school: &SchoolProfile) -> String {
    format!("Your {} Teacher Portal Login Credentials", school.name)
}

/// Welcome body with the login details, sent by the direct variant
pub fn direct_body(record: &CredentialRecord, school: &SchoolProfile) -> String {
    format!(
        "Dear {name},

Welcome to {school}! Your teacher portal account has been created successfully.

Login Details:
• Access ID: {access_id}
• Username: {username}
• Password: {password}
• Portal: {portal}

Best regards,
{school} Administration",
        name = record.teacher_name,
        school = school.name,
        access_id = record.access_id,
        username = record.username,
        password = record.password,
        portal = school.portal_url,
    )
}

/// Short body sent by the simple variant
pub fn simple_body(record: &CredentialRecord, school: &SchoolProfile) -> String {
    format!(
        "Dear {name},

Your teacher portal account has been created:

Login Details:
• Access ID: {access_id}
• Username: {username}
• Password: {password}
• Portal: {portal}

Best regards,
{school}",
        name = record.teacher_name,
        access_id = record.access_id,
        username = record.username,
        password = record.password,
        portal = school.portal_url,
        school = school.name,
    )
}

/// Complete body used by the full template and for manual sending
pub fn full_body(record: &CredentialRecord, school: &SchoolProfile) -> String {
    format!(
        "Dear {name},

Welcome to {school}! Your teacher portal account has been created successfully.

Here are your login credentials for the Student Result Management System:

🔐 Login Details:
• Access ID: {access_id}
• Username: {username}
• Password: {password}
• Registered Email: {teacher_email}

🌐 Portal Access:
You can access the teacher portal at: {portal}

📚 What you can do:
• View and manage students in your assigned classes
• Enter grades and assignments
• Generate student reports
• Track academic progress

🔒 Security Note:
Please keep these credentials secure and do not share them with anyone. You can change your password after logging in.

If you have any questions or need assistance, please contact the school administration.

Best regards,
{school} Administration
Phone: {phone}
Email: {email}

---
This is an automated message from the Student Result Management System.",
        name = record.teacher_name,
        school = school.name,
        access_id = record.access_id,
        username = record.username,
        password = record.password,
        teacher_email = record.teacher_email,
        portal = school.portal_url,
        phone = school.phone,
        email = school.email,
    )
}
