//! Integration key space.
//!
//! Defines the closed `QuickStartType` enumeration of integration identifiers.
//! Each member resolves to the string used as a table key. Several members
//! resolve to the same string (every ecosystem's fallback is `"other"`), so a
//! key string is only meaningful inside the sub-table it was looked up in.

use serde::{Serialize, Serializer};

/// Identifier of a single integration path (framework, language, hosting
/// provider or protocol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs, clippy::upper_case_acronyms)]
pub enum QuickStartType {
    Angular,
    AWSLambda,
    Electron,
    React,
    Remix,
    SvelteKit,
    Next,
    Vue,
    Gatsby,
    SelfHost,
    DevDeploy,
    Other,
    PythonFlask,
    PythonDjango,
    PythonFastAPI,
    PythonLoguru,
    PythonOtel,
    PythonOther,
    PythonAWSFn,
    PythonAzureFn,
    PythonGCPFn,
    PythonLibraries,
    PythonAI,
    GoGqlgen,
    GoFiber,
    GoChi,
    GoEcho,
    GoMux,
    GoGin,
    GoGorm,
    GoLogrus,
    GoOther,
    JSHono,
    JSApollo,
    JSAWSFn,
    JSCloudflare,
    JSExpress,
    JSFirebase,
    JSNodejs,
    JSNextjs,
    JSManual,
    JSNestjs,
    JSWinston,
    JSPino,
    JStRPC,
    HTTPOTLP,
    Syslog,
    Systemd,
    FluentForward,
    Docker,
    File,
    RubyOther,
    RubyRails,
    RustOther,
    RustActix,
    ElixirOther,
    JavaOther,
    HostingVercel,
    HostingFlyIO,
    HostingRender,
    HostingHeroku,
    ReactNative,
    OTLP,
    OTLPDotNet,
    OTLPDotNet4,
}

impl QuickStartType {
    /// Returns every member in declaration order.
    #[must_use]
    pub fn all() -> &'static [QuickStartType] {
        &[
            Self::Angular,
            Self::AWSLambda,
            Self::Electron,
            Self::React,
            Self::Remix,
            Self::SvelteKit,
            Self::Next,
            Self::Vue,
            Self::Gatsby,
            Self::SelfHost,
            Self::DevDeploy,
            Self::Other,
            Self::PythonFlask,
            Self::PythonDjango,
            Self::PythonFastAPI,
            Self::PythonLoguru,
            Self::PythonOtel,
            Self::PythonOther,
            Self::PythonAWSFn,
            Self::PythonAzureFn,
            Self::PythonGCPFn,
            Self::PythonLibraries,
            Self::PythonAI,
            Self::GoGqlgen,
            Self::GoFiber,
            Self::GoChi,
            Self::GoEcho,
            Self::GoMux,
            Self::GoGin,
            Self::GoGorm,
            Self::GoLogrus,
            Self::GoOther,
            Self::JSHono,
            Self::JSApollo,
            Self::JSAWSFn,
            Self::JSCloudflare,
            Self::JSExpress,
            Self::JSFirebase,
            Self::JSNodejs,
            Self::JSNextjs,
            Self::JSManual,
            Self::JSNestjs,
            Self::JSWinston,
            Self::JSPino,
            Self::JStRPC,
            Self::HTTPOTLP,
            Self::Syslog,
            Self::Systemd,
            Self::FluentForward,
            Self::Docker,
            Self::File,
            Self::RubyOther,
            Self::RubyRails,
            Self::RustOther,
            Self::RustActix,
            Self::ElixirOther,
            Self::JavaOther,
            Self::HostingVercel,
            Self::HostingFlyIO,
            Self::HostingRender,
            Self::HostingHeroku,
            Self::ReactNative,
            Self::OTLP,
            Self::OTLPDotNet,
            Self::OTLPDotNet4,
        ]
    }

    /// Returns the table key this member is stored under.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Angular => "angular",
            Self::AWSLambda => "aws-lambda",
            Self::Electron => "electron",
            Self::React => "react",
            Self::Remix => "remix",
            Self::SvelteKit => "svelte-kit",
            Self::Next => "next",
            Self::Vue => "vue",
            Self::Gatsby => "gatsby",
            Self::SelfHost => "self-host",
            Self::DevDeploy => "dev-deploy",
            Self::Other
            | Self::PythonOther
            | Self::GoOther
            | Self::RubyOther
            | Self::RustOther
            | Self::ElixirOther
            | Self::JavaOther => "other",
            Self::PythonFlask => "flask",
            Self::PythonDjango => "django",
            Self::PythonFastAPI => "fastapi",
            Self::PythonLoguru => "loguru",
            Self::PythonOtel => "otel",
            Self::PythonAWSFn => "aws-lambda-python",
            Self::PythonAzureFn => "azure-functions",
            Self::PythonGCPFn => "google-cloud-functions",
            Self::PythonLibraries => "python-libraries",
            Self::PythonAI => "python-ai",
            Self::GoGqlgen => "gqlgen",
            Self::GoFiber => "fiber",
            Self::GoChi => "chi",
            Self::GoEcho => "echo",
            Self::GoMux => "mux",
            Self::GoGin => "gin",
            Self::GoGorm => "gorm",
            Self::GoLogrus => "logrus",
            Self::JSHono => "hono",
            Self::JSApollo => "apollo",
            Self::JSAWSFn => "aws-lambda-node",
            Self::JSCloudflare => "cloudflare",
            Self::JSExpress => "express",
            Self::JSFirebase => "firebase",
            Self::JSNodejs => "nodejs",
            Self::JSNextjs => "nextjs",
            Self::JSManual => "manual",
            Self::JSNestjs => "nestjs",
            Self::JSWinston => "winston",
            Self::JSPino => "pino",
            Self::JStRPC => "trpc",
            Self::HTTPOTLP => "curl",
            Self::Syslog => "syslog",
            Self::Systemd => "systemd",
            Self::FluentForward => "fluent-forward",
            Self::Docker => "docker",
            Self::File => "file",
            Self::RubyRails => "rails",
            Self::RustActix => "actix",
            Self::HostingVercel => "vercel",
            Self::HostingFlyIO => "fly-io",
            Self::HostingRender => "render",
            Self::HostingHeroku => "heroku",
            Self::ReactNative => "react-native",
            Self::OTLP => "otlp",
            Self::OTLPDotNet => "dot-net",
            Self::OTLPDotNet4 => "dot-net-4",
        }
    }

    /// Returns every member stored under the given key string.
    ///
    /// A key string alone does not identify an integration: `"other"` maps to
    /// seven members. The result is empty for unknown keys.
    ///
    /// # Example
    ///
    /// ```
    /// use registry::models::QuickStartType;
    ///
    /// assert_eq!(QuickStartType::candidates("chi"), vec![QuickStartType::GoChi]);
    /// assert!(QuickStartType::candidates("other").len() > 1);
    /// assert!(QuickStartType::candidates("cobol").is_empty());
    /// ```
    #[must_use]
    pub fn candidates(key: &str) -> Vec<QuickStartType> {
        Self::all()
            .iter()
            .copied()
            .filter(|member| member.as_str() == key)
            .collect()
    }
}

impl std::fmt::Display for QuickStartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for QuickStartType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
