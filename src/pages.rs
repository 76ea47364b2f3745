use std::{fmt, str::FromStr};

/// A top-level route of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`, the note list and editor.
    Notes,
    /// `/privacy-policy`
    PrivacyPolicy,
    /// `/terms-of-service`
    TermsOfService,
    /// `/contact`
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Self; 4] = [
        Self::Notes,
        Self::PrivacyPolicy,
        Self::TermsOfService,
        Self::Contact,
    ];

    /// The path this route is served at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Notes => "/",
            Self::PrivacyPolicy => "/privacy-policy",
            Self::TermsOfService => "/terms-of-service",
            Self::Contact => "/contact",
        }
    }

    /// The static page served at this route.
    ///
    /// The note application itself is not a static page.
    #[must_use]
    pub fn page(self) -> Option<&'static Page> {
        match self {
            Self::Notes => None,
            Self::PrivacyPolicy => Some(&PRIVACY_POLICY),
            Self::TermsOfService => Some(&TERMS_OF_SERVICE),
            Self::Contact => Some(&CONTACT),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The path does not name a route.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no route for '{0}' (expected /, /privacy-policy, /terms-of-service or /contact)")]
pub struct RouteError(String);

impl FromStr for Route {
    type Err = RouteError;

    /// Parses a path. The leading and trailing slashes are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == trimmed)
            .ok_or_else(|| RouteError(s.to_string()))
    }
}

/// A static informational page.
#[derive(Debug, PartialEq, Eq)]
pub struct Page {
    /// The page heading.
    pub title: &'static str,
    /// The opening paragraph.
    pub intro: &'static str,
    /// Headed sections following the introduction.
    pub sections: &'static [Section],
}

/// A headed block of text on a [`Page`].
#[derive(Debug, PartialEq, Eq)]
pub struct Section {
    /// The section heading.
    pub heading: &'static str,
    /// The section text, one entry per line.
    pub lines: &'static [&'static str],
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f)?;
        writeln!(f, "{}", self.intro)?;
        for section in self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            writeln!(f, "{}", "-".repeat(section.heading.chars().count()))?;
            for line in section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

static PRIVACY_POLICY: Page = Page {
    title: "Privacy Policy",
    intro: "Your privacy is important to us. This privacy statement explains the personal data \
            our application processes, how we process it, and for what purposes.",
    sections: &[
        Section {
            heading: "Information We Collect",
            lines: &["We collect data to provide the best experience for our users. The data we \
                      collect includes information like name, email address, and any other \
                      details provided by you."],
        },
        Section {
            heading: "How We Use Your Information",
            lines: &["The information we collect is used to personalize your experience, improve \
                      our application, and communicate with you about updates and features."],
        },
        Section {
            heading: "Your Consent",
            lines: &["By using our site or app, you consent to our privacy policy."],
        },
    ],
};

static TERMS_OF_SERVICE: Page = Page {
    title: "Terms of Service",
    intro: "By using this application, you agree to the following terms and conditions. Please \
            read them carefully.",
    sections: &[
        Section {
            heading: "Use of Application",
            lines: &["This app is provided for your personal, non-commercial use only. You agree \
                      not to use the app for any illegal or unauthorized purpose."],
        },
        Section {
            heading: "Account Security",
            lines: &["You are responsible for maintaining the confidentiality of your account and \
                      password. You agree to accept responsibility for all activities that occur \
                      under your account."],
        },
        Section {
            heading: "Termination",
            lines: &["We reserve the right to terminate your access to the application at any \
                      time without notice, for conduct that we believe violates these terms or \
                      is harmful to other users of the app."],
        },
    ],
};

static CONTACT: Page = Page {
    title: "Contact Us",
    intro: "For any inquiries, feedback, or support, please reach out to us through the \
            following channels:",
    sections: &[Section {
        heading: "Developer Information",
        lines: &["Open an issue on the project's issue tracker."],
    }],
};
