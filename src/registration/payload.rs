// ABOUTME: RegistrationPayload - the nested JSON body the registration
// ABOUTME: service expects, assembled from a ValidatedRegistration.

use serde::{Deserialize, Serialize};

use crate::params::ValidatedRegistration;

/// Organizational identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminGroup {
    pub admin_id: i64,
    pub organization_id: i64,
    pub superadmin_id: i64,
    pub associate_id: i64,
}

/// Which exam and question set the user is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamGroup {
    pub exam_id: i64,
    pub set_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OemColor {
    pub primary: String,
    pub background: String,
    pub cta: String,
    pub cta_text_color: String,
    pub cta_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OemHeader {
    pub logo: String,
    pub name: String,
    pub color: OemColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OemFooter {
    pub copyright_text: String,
    pub test_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OemLinks {
    pub backtodashboard: String,
    pub testlink: String,
    pub reportlink: String,
}

/// White-label branding for the exam pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OemGroup {
    pub header: OemHeader,
    pub footer: OemFooter,
    pub links: OemLinks,
}

/// End-user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub username: String,
    pub emailid: String,
    pub contact_no: String,
}

/// Request body for the registration service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub admin: AdminGroup,
    pub exam: ExamGroup,
    pub oem: OemGroup,
    pub user: UserGroup,
    pub client_id: String,
    pub client_log: String,
}

impl From<ValidatedRegistration> for RegistrationPayload {
    fn from(reg: ValidatedRegistration) -> Self {
        RegistrationPayload {
            admin: AdminGroup {
                admin_id: reg.admin_id,
                organization_id: reg.organization_id,
                superadmin_id: reg.superadmin_id,
                associate_id: reg.associate_id,
            },
            exam: ExamGroup {
                exam_id: reg.exam_id,
                set_id: reg.set_id,
            },
            oem: OemGroup {
                header: OemHeader {
                    logo: reg.logo,
                    name: reg.name,
                    color: OemColor {
                        primary: reg.primary,
                        background: reg.background,
                        cta: reg.cta,
                        cta_text_color: reg.cta_text_color,
                        cta_text: reg.cta_text,
                    },
                },
                footer: OemFooter {
                    copyright_text: reg.copyright_text,
                    test_name: reg.test_name,
                },
                links: OemLinks {
                    backtodashboard: reg.backtodashboard,
                    testlink: reg.testlink,
                    reportlink: reg.reportlink,
                },
            },
            user: UserGroup {
                username: reg.username,
                emailid: reg.emailid,
                contact_no: reg.contact_no,
            },
            client_id: reg.client_id,
            client_log: reg.client_log,
        }
    }
}

impl From<RegistrationPayload> for ValidatedRegistration {
    fn from(payload: RegistrationPayload) -> Self {
        let RegistrationPayload {
            admin,
            exam,
            oem,
            user,
            client_id,
            client_log,
        } = payload;
        let OemGroup {
            header,
            footer,
            links,
        } = oem;

        ValidatedRegistration {
            username: user.username,
            emailid: user.emailid,
            contact_no: user.contact_no,
            admin_id: admin.admin_id,
            organization_id: admin.organization_id,
            superadmin_id: admin.superadmin_id,
            associate_id: admin.associate_id,
            exam_id: exam.exam_id,
            set_id: exam.set_id,
            logo: header.logo,
            name: header.name,
            primary: header.color.primary,
            background: header.color.background,
            cta: header.color.cta,
            cta_text_color: header.color.cta_text_color,
            cta_text: header.color.cta_text,
            copyright_text: footer.copyright_text,
            test_name: footer.test_name,
            backtodashboard: links.backtodashboard,
            testlink: links.testlink,
            reportlink: links.reportlink,
            client_id,
            client_log,
        }
    }
}
