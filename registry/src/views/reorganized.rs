//! Reorganized taxonomy: integrations grouped by source ecosystem.
//!
//! Every category has a single `sdks` sub-table and carries its title as
//! category metadata.

use super::{CategorySpec, GroupSpec, MetadataSpec};
use crate::models::QuickStartType;

/// Categories of the reorganized view, in display order.
pub const REORGANIZED: &[CategorySpec] = &[
    CategorySpec {
        name: "client",
        metadata: Some(MetadataSpec {
            title: "Client / Fullstack",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[
                (QuickStartType::React, "frontend/react"),
                (QuickStartType::Angular, "frontend/angular"),
                (QuickStartType::Next, "frontend/next"),
                (QuickStartType::Remix, "frontend/remix"),
                (QuickStartType::Vue, "frontend/vue"),
                (QuickStartType::SvelteKit, "frontend/sveltekit"),
                (QuickStartType::Gatsby, "frontend/gatsby"),
                (QuickStartType::Electron, "frontend/electron"),
                (QuickStartType::Other, "frontend/other"),
                (QuickStartType::ReactNative, "frontend/react-native"),
            ],
        }],
    },
    CategorySpec {
        name: "dotnet",
        metadata: Some(MetadataSpec {
            title: ".NET",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[
                (QuickStartType::OTLPDotNet, "server/dotnet/dot-net"),
                (QuickStartType::OTLPDotNet4, "server/dotnet/dot-net-4"),
            ],
        }],
    },
    CategorySpec {
        name: "elixir",
        metadata: Some(MetadataSpec {
            title: "Elixir",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[(QuickStartType::ElixirOther, "server/elixir/other")],
        }],
    },
    CategorySpec {
        name: "go",
        metadata: Some(MetadataSpec {
            title: "Golang",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[
                (QuickStartType::GoChi, "server/go/chi"),
                (QuickStartType::GoEcho, "server/go/echo"),
                (QuickStartType::GoFiber, "server/go/fiber"),
                (QuickStartType::GoGin, "server/go/gin"),
                (QuickStartType::GoGqlgen, "server/go/gqlgen"),
                (QuickStartType::GoMux, "server/go/mux"),
                (QuickStartType::GoLogrus, "server/go/logrus"),
                (QuickStartType::GoGorm, "server/go/gorm"),
                (QuickStartType::GoOther, "server/go/go"),
            ],
        }],
    },
    CategorySpec {
        name: "infra",
        metadata: Some(MetadataSpec {
            title: "Infrastructure / Other",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[
                (QuickStartType::FluentForward, "server/infra/fluent-forward"),
                (QuickStartType::File, "server/infra/file"),
                (QuickStartType::Docker, "server/infra/docker"),
                (QuickStartType::HTTPOTLP, "server/infra/http"),
                (QuickStartType::Syslog, "server/infra/syslog"),
                (QuickStartType::Systemd, "server/infra/systemd"),
            ],
        }],
    },
    CategorySpec {
        name: "java",
        metadata: Some(MetadataSpec {
            title: "Java",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[(QuickStartType::JavaOther, "server/java/other")],
        }],
    },
    CategorySpec {
        name: "js",
        metadata: Some(MetadataSpec {
            title: "JavaScript",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[
                (QuickStartType::JSApollo, "server/js/apollo"),
                (QuickStartType::JSAWSFn, "server/js/aws-lambda"),
                (QuickStartType::JSCloudflare, "server/js/cloudflare"),
                (QuickStartType::JSExpress, "server/js/express"),
                (QuickStartType::JSFirebase, "server/js/firebase"),
                (QuickStartType::JSHono, "server/js/hono"),
                (QuickStartType::JSNodejs, "server/js/nodejs"),
                (QuickStartType::JSNestjs, "server/js/nestjs"),
                (QuickStartType::JStRPC, "server/js/trpc"),
                (QuickStartType::JSPino, "server/js/pino"),
                (QuickStartType::JSWinston, "server/js/winston"),
                (QuickStartType::JSManual, "server/js/manual"),
                (QuickStartType::OTLP, "server/otlp/otlp"),
            ],
        }],
    },
    CategorySpec {
        name: "php",
        metadata: Some(MetadataSpec {
            title: "PHP",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[(QuickStartType::Other, "server/php/other")],
        }],
    },
    CategorySpec {
        name: "python",
        metadata: Some(MetadataSpec {
            title: "Python",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[
                (QuickStartType::PythonAWSFn, "server/python/aws"),
                (QuickStartType::PythonAzureFn, "server/python/azure"),
                (QuickStartType::PythonDjango, "server/python/django"),
                (QuickStartType::PythonFastAPI, "server/python/fastapi"),
                (QuickStartType::PythonFlask, "server/python/flask"),
                (QuickStartType::PythonGCPFn, "server/python/gcp"),
                (QuickStartType::PythonLoguru, "server/python/loguru"),
                (QuickStartType::PythonOther, "server/python/other"),
                (QuickStartType::PythonLibraries, "server/python/python-libraries"),
                (QuickStartType::PythonAI, "server/python/python-ai"),
            ],
        }],
    },
    CategorySpec {
        name: "ruby",
        metadata: Some(MetadataSpec {
            title: "Ruby",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[
                (QuickStartType::RubyOther, "server/ruby/other"),
                (QuickStartType::RubyRails, "server/ruby/rails"),
            ],
        }],
    },
    CategorySpec {
        name: "rust",
        metadata: Some(MetadataSpec {
            title: "Rust",
            subtitle: None,
            logo_path: None,
        }),
        groups: &[GroupSpec {
            name: "sdks",
            metadata: None,
            entries: &[
                (QuickStartType::RustActix, "server/rust/actix"),
                (QuickStartType::RustOther, "server/rust/other"),
            ],
        }],
    },
];
