//! Legacy taxonomy: integrations grouped by product surface.

use super::{CategorySpec, GroupSpec, MetadataSpec};
use crate::models::QuickStartType;

/// Categories of the legacy view, in display order.
pub const LEGACY: &[CategorySpec] = &[
    CategorySpec {
        name: "client",
        metadata: None,
        groups: &[GroupSpec {
            name: "js",
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
        name: "backend",
        metadata: None,
        groups: &[
            GroupSpec {
                name: "python",
                metadata: None,
                entries: &[
                    (QuickStartType::PythonFlask, "backend/python/flask"),
                    (QuickStartType::PythonDjango, "backend/python/django"),
                    (QuickStartType::PythonFastAPI, "backend/python/fastapi"),
                    (QuickStartType::PythonOther, "backend/python/other"),
                    (QuickStartType::PythonAWSFn, "backend/python/aws"),
                    (QuickStartType::PythonAzureFn, "backend/python/azure"),
                    (QuickStartType::PythonGCPFn, "backend/python/gcp"),
                ],
            },
            GroupSpec {
                name: "go",
                metadata: None,
                entries: &[
                    (QuickStartType::GoGqlgen, "backend/go/gqlgen"),
                    (QuickStartType::GoFiber, "backend/go/fiber"),
                    (QuickStartType::GoEcho, "backend/go/echo"),
                    (QuickStartType::GoChi, "backend/go/chi"),
                    (QuickStartType::GoMux, "backend/go/mux"),
                    (QuickStartType::GoGin, "backend/go/gin"),
                ],
            },
            GroupSpec {
                name: "js",
                metadata: None,
                entries: &[
                    (QuickStartType::JSApollo, "backend/js/apollo"),
                    (QuickStartType::JSAWSFn, "backend/js/aws-lambda"),
                    (QuickStartType::JSCloudflare, "backend/js/cloudflare"),
                    (QuickStartType::JSExpress, "backend/js/express"),
                    (QuickStartType::JSFirebase, "backend/js/firebase"),
                    (QuickStartType::JSHono, "backend/js/hono"),
                    (QuickStartType::JSNodejs, "backend/js/nodejs"),
                    (QuickStartType::JSNestjs, "backend/js/nestjs"),
                    (QuickStartType::JStRPC, "backend/js/trpc"),
                ],
            },
            GroupSpec {
                name: "ruby",
                metadata: None,
                entries: &[
                    (QuickStartType::RubyRails, "backend/ruby/rails"),
                    (QuickStartType::RubyOther, "backend/ruby/other"),
                ],
            },
            GroupSpec {
                name: "rust",
                metadata: None,
                entries: &[
                    (QuickStartType::RustActix, "backend/rust/actix"),
                    (QuickStartType::RustOther, "backend/rust/other"),
                ],
            },
            GroupSpec {
                name: "elixir",
                metadata: None,
                entries: &[(QuickStartType::ElixirOther, "backend/elixir/other")],
            },
            GroupSpec {
                name: "java",
                metadata: None,
                entries: &[(QuickStartType::JavaOther, "backend/java/other")],
            },
            GroupSpec {
                name: "php",
                metadata: None,
                entries: &[(QuickStartType::Other, "backend/php/other")],
            },
            GroupSpec {
                name: "dotnet",
                metadata: None,
                entries: &[
                    (QuickStartType::OTLPDotNet, "traces/dotnet/dot-net"),
                    (QuickStartType::OTLPDotNet4, "traces/dotnet/dot-net-4"),
                ],
            },
            GroupSpec {
                name: "otlp",
                metadata: None,
                entries: &[
                    (QuickStartType::OTLP, "backend/otlp/otlp"),
                    (QuickStartType::OTLPDotNet, "traces/dotnet/dot-net"),
                    (QuickStartType::OTLPDotNet4, "traces/dotnet/dot-net-4"),
                ],
            },
        ],
    },
    CategorySpec {
        name: "backend-logging",
        metadata: None,
        groups: &[
            GroupSpec {
                name: "python",
                metadata: None,
                entries: &[
                    (QuickStartType::PythonLoguru, "logging/python/loguru"),
                    (QuickStartType::PythonOther, "logging/python/other"),
                    (QuickStartType::PythonOtel, "logging/python/otel"),
                ],
            },
            GroupSpec {
                name: "go",
                metadata: None,
                entries: &[
                    (QuickStartType::GoLogrus, "logging/go/other"),
                    (QuickStartType::GoOther, "logging/go/other"),
                    (QuickStartType::GoFiber, "logging/go/fiber"),
                ],
            },
            GroupSpec {
                name: "js",
                metadata: None,
                entries: &[
                    (QuickStartType::JSNodejs, "logging/js/other"),
                    (QuickStartType::JSNestjs, "logging/js/nestjs"),
                    (QuickStartType::JSWinston, "logging/js/winston"),
                    (QuickStartType::JSPino, "logging/js/pino"),
                    (QuickStartType::JSCloudflare, "logging/js/cloudflare"),
                ],
            },
            GroupSpec {
                name: "other",
                metadata: None,
                entries: &[
                    (QuickStartType::FluentForward, "logging/infra/fluent-forward"),
                    (QuickStartType::File, "logging/infra/file"),
                    (QuickStartType::Docker, "logging/infra/docker"),
                    (QuickStartType::HTTPOTLP, "logging/infra/http"),
                    (QuickStartType::Syslog, "logging/infra/syslog"),
                    (QuickStartType::Systemd, "logging/infra/systemd"),
                ],
            },
            GroupSpec {
                name: "ruby",
                metadata: None,
                entries: &[
                    (QuickStartType::RubyRails, "logging/ruby/rails"),
                    (QuickStartType::RubyOther, "logging/ruby/other"),
                ],
            },
            GroupSpec {
                name: "rust",
                metadata: None,
                entries: &[
                    (QuickStartType::RustActix, "logging/rust/actix"),
                    (QuickStartType::RustOther, "logging/rust/other"),
                ],
            },
            GroupSpec {
                name: "elixir",
                metadata: None,
                entries: &[(QuickStartType::ElixirOther, "logging/elixir/other")],
            },
            GroupSpec {
                name: "java",
                metadata: None,
                entries: &[(QuickStartType::JavaOther, "logging/java/other")],
            },
            GroupSpec {
                name: "php",
                metadata: None,
                entries: &[(QuickStartType::Other, "logging/php/other")],
            },
            GroupSpec {
                name: "hosting",
                metadata: None,
                entries: &[
                    (QuickStartType::HostingVercel, "logging/hosting/vercel"),
                    (QuickStartType::HostingFlyIO, "logging/hosting/fly-io"),
                    (QuickStartType::HostingRender, "logging/hosting/render"),
                    (QuickStartType::HostingHeroku, "logging/hosting/heroku"),
                ],
            },
            GroupSpec {
                name: "dotnet",
                metadata: None,
                entries: &[
                    (QuickStartType::OTLPDotNet, "traces/dotnet/dot-net"),
                    (QuickStartType::OTLPDotNet4, "traces/dotnet/dot-net-4"),
                ],
            },
            GroupSpec {
                name: "otlp",
                metadata: None,
                entries: &[
                    (QuickStartType::OTLP, "logging/otlp/otlp"),
                    (QuickStartType::OTLPDotNet, "traces/dotnet/dot-net"),
                    (QuickStartType::OTLPDotNet4, "traces/dotnet/dot-net-4"),
                ],
            },
        ],
    },
    CategorySpec {
        name: "traces",
        metadata: None,
        groups: &[
            GroupSpec {
                name: "node-js",
                metadata: None,
                entries: &[(QuickStartType::JSManual, "traces/node-js/manual")],
            },
            GroupSpec {
                name: "next-js",
                metadata: None,
                entries: &[(QuickStartType::JSNextjs, "traces/node-js/nextjs")],
            },
            GroupSpec {
                name: "go",
                metadata: None,
                entries: &[
                    (QuickStartType::GoOther, "traces/go/go"),
                    (QuickStartType::GoGorm, "traces/go/gorm"),
                ],
            },
            GroupSpec {
                name: "python",
                metadata: None,
                entries: &[
                    (QuickStartType::PythonOther, "traces/python/manual"),
                    (QuickStartType::PythonAWSFn, "traces/python/aws"),
                    (QuickStartType::PythonAzureFn, "traces/python/azure"),
                    (QuickStartType::PythonDjango, "traces/python/django"),
                    (QuickStartType::PythonFastAPI, "traces/python/fastapi"),
                    (QuickStartType::PythonFlask, "traces/python/flask"),
                    (QuickStartType::PythonGCPFn, "traces/python/gcp"),
                    (QuickStartType::PythonLibraries, "traces/python/python-libraries"),
                    (QuickStartType::PythonAI, "traces/python/python-ai"),
                ],
            },
            GroupSpec {
                name: "php",
                metadata: None,
                entries: &[(QuickStartType::Other, "traces/php/other")],
            },
            GroupSpec {
                name: "dotnet",
                metadata: None,
                entries: &[
                    (QuickStartType::OTLPDotNet, "traces/dotnet/dot-net"),
                    (QuickStartType::OTLPDotNet4, "traces/dotnet/dot-net-4"),
                ],
            },
            GroupSpec {
                name: "otlp",
                metadata: None,
                entries: &[
                    (QuickStartType::OTLP, "traces/otlp/otlp"),
                    (QuickStartType::OTLPDotNet, "traces/dotnet/dot-net"),
                    (QuickStartType::OTLPDotNet4, "traces/dotnet/dot-net-4"),
                ],
            },
            GroupSpec {
                name: "rust",
                metadata: None,
                entries: &[
                    (QuickStartType::RustOther, "traces/rust/rust"),
                    (QuickStartType::RustActix, "traces/rust/rust"),
                ],
            },
            GroupSpec {
                name: "serverless",
                metadata: None,
                entries: &[(QuickStartType::AWSLambda, "traces/serverless/lambda")],
            },
            GroupSpec {
                name: "ruby",
                metadata: None,
                entries: &[
                    (QuickStartType::RubyRails, "traces/ruby/rails"),
                    (QuickStartType::RubyOther, "traces/ruby/other"),
                ],
            },
        ],
    },
    CategorySpec {
        name: "metrics",
        metadata: None,
        groups: &[
            GroupSpec {
                name: "dotnet",
                metadata: None,
                entries: &[
                    (QuickStartType::OTLPDotNet, "traces/dotnet/dot-net"),
                    (QuickStartType::OTLPDotNet4, "traces/dotnet/dot-net-4"),
                ],
            },
            GroupSpec {
                name: "otlp",
                metadata: None,
                entries: &[(QuickStartType::OTLP, "traces/otlp/otlp")],
            },
        ],
    },
    CategorySpec {
        name: "other",
        metadata: None,
        groups: &[GroupSpec {
            name: "other",
            metadata: None,
            entries: &[
                (QuickStartType::SelfHost, "self-host/self-host"),
                (QuickStartType::DevDeploy, "self-host/dev-deploy"),
            ],
        }],
    },
    CategorySpec {
        name: "server",
        metadata: None,
        groups: &[
            GroupSpec {
                name: "go",
                metadata: Some(MetadataSpec {
                    title: "Go",
                    subtitle: Some(
                        "Select your Go framework to install Highlight for your application.",
                    ),
                    logo_path: Some("/images/quickstart/go.svg"),
                }),
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
            },
            GroupSpec {
                name: "java",
                metadata: Some(MetadataSpec {
                    title: "Java",
                    subtitle: Some(
                        "Select your Java framework to install Highlight in your application.",
                    ),
                    logo_path: Some("/images/quickstart/java.svg"),
                }),
                entries: &[(QuickStartType::JavaOther, "server/java/other")],
            },
            GroupSpec {
                name: "js",
                metadata: Some(MetadataSpec {
                    title: "JavaScript",
                    subtitle: Some(
                        "Select your JavaScript framework to install Highlight for your application.",
                    ),
                    logo_path: Some("/images/quickstart/javascript.svg"),
                }),
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
                    (QuickStartType::JSNextjs, "server/js/nextjs"),
                ],
            },
            GroupSpec {
                name: "php",
                metadata: Some(MetadataSpec {
                    title: "PHP",
                    subtitle: Some(
                        "Select your PHP framework to install Highlight for your application.",
                    ),
                    logo_path: Some("/images/quickstart/php.svg"),
                }),
                entries: &[(QuickStartType::Other, "server/php/other")],
            },
            GroupSpec {
                name: "python",
                metadata: Some(MetadataSpec {
                    title: "Python",
                    subtitle: Some(
                        "Select your Python framework to install Highlight in your application.",
                    ),
                    logo_path: Some("/images/quickstart/python.svg"),
                }),
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
            },
            GroupSpec {
                name: "ruby",
                metadata: Some(MetadataSpec {
                    title: "Ruby",
                    subtitle: Some(
                        "Select your Ruby framework to install Highlight for your application.",
                    ),
                    logo_path: Some("/images/quickstart/ruby.svg"),
                }),
                entries: &[
                    (QuickStartType::RubyOther, "server/ruby/other"),
                    (QuickStartType::RubyRails, "server/ruby/rails"),
                ],
            },
            GroupSpec {
                name: "rust",
                metadata: Some(MetadataSpec {
                    title: "Rust",
                    subtitle: Some(
                        "Select your Rust framework to install Highlight for your application.",
                    ),
                    logo_path: Some("/images/quickstart/rust.svg"),
                }),
                entries: &[
                    (QuickStartType::RustActix, "server/rust/actix"),
                    (QuickStartType::RustOther, "server/rust/other"),
                ],
            },
            GroupSpec {
                name: "elixir",
                metadata: Some(MetadataSpec {
                    title: "Elixir",
                    subtitle: Some(
                        "Select your Elixir framework to install Highlight for your application.",
                    ),
                    logo_path: Some("/images/quickstart/elixir.svg"),
                }),
                entries: &[(QuickStartType::ElixirOther, "server/elixir/other")],
            },
            GroupSpec {
                name: "otlp",
                metadata: Some(MetadataSpec {
                    title: "OpenTelemetry",
                    subtitle: Some("OpenTelemetry Protocol (OTLP)"),
                    logo_path: None,
                }),
                entries: &[
                    (QuickStartType::OTLP, "server/otlp/otlp"),
                    (QuickStartType::OTLPDotNet, "server/dotnet/dot-net"),
                    (QuickStartType::OTLPDotNet4, "server/dotnet/dot-net-4"),
                ],
            },
            GroupSpec {
                name: "other",
                metadata: Some(MetadataSpec {
                    title: "Infrastructure / Other",
                    subtitle: Some(
                        "Get started with logging in your application via HTTP or OTLP.",
                    ),
                    logo_path: None,
                }),
                entries: &[
                    (QuickStartType::FluentForward, "server/infra/fluent-forward"),
                    (QuickStartType::File, "server/infra/file"),
                    (QuickStartType::Docker, "server/infra/docker"),
                    (QuickStartType::HTTPOTLP, "server/infra/http"),
                    (QuickStartType::Syslog, "server/infra/syslog"),
                    (QuickStartType::Systemd, "server/infra/systemd"),
                ],
            },
        ],
    },
];
