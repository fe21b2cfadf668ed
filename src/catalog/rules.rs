//! The detection rule catalog.
//!
//! One [`RuleSet`] per detectable platform, hand-written, constructed once
//! as a plain `static` and never mutated. Concurrent scans share it
//! without locking. Pattern semantics are documented on the evaluator;
//! this module only holds data.

use crate::catalog::platform::{BuildTool, Platform};

/// Weights applied to each signal category when aggregating a score.
///
/// Chosen to sum to 1.0 so the aggregate lands naturally in `[0, 1]`;
/// the aggregator still clamps as a hard invariant.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Core project files (e.g. pom.xml, package.json).
    pub primary: f64,
    /// Supporting files (lock files, wrappers, entry points).
    pub secondary: f64,
    /// Directory structure indicators.
    pub structure: f64,
    /// Known configuration files.
    pub config: f64,
    /// Framework detection.
    pub framework: f64,
    /// File content analysis.
    pub content: f64,
}

/// The weights used for every scan.
pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    primary: 0.35,
    secondary: 0.10,
    structure: 0.15,
    config: 0.10,
    framework: 0.20,
    content: 0.10,
};

/// Directory names pruned during scanning at any depth.
pub static IGNORED_DIRS: [&str; 12] = [
    "node_modules",
    ".git",
    "venv",
    "__pycache__",
    "target",
    "build",
    "dist",
    ".vscode",
    ".idea",
    "bin",
    "obj",
    "vendor",
];

/// One named framework and the trigger strings that identify it.
///
/// Frameworks are checked in declaration order; the first with any
/// matching trigger wins, so more specific frameworks come first.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
}

/// Where framework triggers are matched for a platform.
#[derive(Debug, Clone, Copy)]
pub enum FrameworkSource {
    /// Triggers are matched against parsed dependency names from a JSON
    /// package manifest at the scan root (declared + development deps).
    DependencyManifest {
        file: &'static str,
        sections: &'static [&'static str],
    },
    /// Triggers are matched as substrings of the raw text of any of
    /// these project descriptor files at the scan root.
    Descriptor(&'static [&'static str]),
    /// Triggers are matched as substrings of discovered file paths.
    FilePaths,
}

/// Content inspection rule: files matching `file_pattern` are read
/// (capped) and searched for any of `substrings`, case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct ContentRule {
    pub file_pattern: &'static str,
    pub substrings: &'static [&'static str],
}

/// How the build tool is inferred for a platform.
#[derive(Debug, Clone, Copy)]
pub enum BuildToolRule {
    /// pom.xml selects Maven; any gradle build file selects Gradle.
    JavaDialect,
    /// Most specific lock file wins: pnpm-lock.yaml, then yarn.lock,
    /// then package-lock.json, defaulting to npm.
    NodeLockFiles,
    /// Single-tool ecosystem; reported whenever a primary file matched.
    Fixed(BuildTool),
}

/// Build command for one tool of a platform.
#[derive(Debug, Clone, Copy)]
pub struct CommandRule {
    pub tool: BuildTool,
    pub command: &'static str,
}

/// All detection rules for one platform.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub platform: Platform,
    /// Core project files; any match earns the full primary weight.
    pub primary: &'static [&'static str],
    /// Supporting files; each matching pattern counts one hit.
    pub secondary: &'static [&'static str],
    /// Relative paths probed for existence directly under the root.
    pub structure: &'static [&'static str],
    /// Name fragments matched as substrings of discovered paths.
    pub config_files: &'static [&'static str],
    pub frameworks: &'static [FrameworkRule],
    pub framework_source: FrameworkSource,
    pub content: &'static [ContentRule],
    pub build_tool: BuildToolRule,
    pub build_commands: &'static [CommandRule],
    /// Install command for dependency-only ecosystems.
    pub install_command: Option<&'static str>,
}

/// Look up the rule set for a platform. `Unknown` has no rules.
pub fn rules_for(platform: Platform) -> Option<&'static RuleSet> {
    CATALOG.iter().find(|r| r.platform == platform)
}

/// The full catalog in evaluation order.
pub fn catalog() -> &'static [RuleSet] {
    &CATALOG
}

static CATALOG: [RuleSet; 8] = [
    RuleSet {
        platform: Platform::Java,
        primary: &["pom.xml", "build.gradle", "build.gradle.kts"],
        secondary: &[
            "src/main/java",
            "gradlew",
            "mvnw",
            "gradlew.bat",
            "mvnw.cmd",
        ],
        structure: &[
            "src/main/resources",
            "src/test/java",
            "src/main/webapp",
        ],
        config_files: &[
            "application.properties",
            "application.yml",
            "application.yaml",
        ],
        frameworks: &[
            FrameworkRule {
                name: "Spring Boot",
                triggers: &[
                    "spring-boot-starter",
                    "SpringBootApplication",
                    "@SpringBootApplication",
                    "application.properties",
                    "application.yml",
                ],
            },
            FrameworkRule {
                name: "Spring",
                triggers: &[
                    "springframework",
                    "@Component",
                    "@Service",
                    "@Controller",
                ],
            },
            FrameworkRule {
                name: "Jakarta EE",
                triggers: &[
                    "jakarta.servlet",
                    "persistence.xml",
                    "beans.xml",
                ],
            },
            FrameworkRule {
                name: "Micronaut",
                triggers: &["micronaut", "@Controller"],
            },
            FrameworkRule {
                name: "Quarkus",
                triggers: &["quarkus", "application.properties"],
            },
            FrameworkRule { name: "Maven", triggers: &["pom.xml"] },
            FrameworkRule {
                name: "Gradle",
                triggers: &[
                    "build.gradle",
                    "build.gradle.kts",
                    "settings.gradle",
                ],
            },
        ],
        framework_source: FrameworkSource::Descriptor(&[
            "pom.xml",
            "build.gradle",
            "build.gradle.kts",
        ]),
        content: &[
            ContentRule {
                file_pattern: "pom.xml",
                substrings: &[
                    "<groupId>org.springframework.boot</groupId>",
                    "<artifactId>spring-boot",
                    "<groupId>jakarta.enterprise</groupId>",
                    "<groupId>io.micronaut</groupId>",
                ],
            },
            ContentRule {
                file_pattern: "build.gradle",
                substrings: &[
                    "spring-boot-starter",
                    "org.springframework.boot",
                    "io.micronaut",
                ],
            },
            ContentRule {
                file_pattern: "*.java",
                substrings: &[
                    "@SpringBootApplication",
                    "@RestController",
                    "@Service",
                    "@Component",
                ],
            },
        ],
        build_tool: BuildToolRule::JavaDialect,
        build_commands: &[
            CommandRule {
                tool: BuildTool::Maven,
                command: "mvn clean package",
            },
            CommandRule {
                tool: BuildTool::Gradle,
                command: "gradle build",
            },
        ],
        install_command: None,
    },
    RuleSet {
        platform: Platform::NodeJs,
        primary: &["package.json"],
        secondary: &[
            "package-lock.json",
            "yarn.lock",
            "pnpm-lock.yaml",
            "node_modules",
            ".npmrc",
            ".yarnrc",
            "pnpm-workspace.yaml",
        ],
        structure: &["src", "public", "dist", "build"],
        config_files: &[
            "tsconfig.json",
            "webpack.config.js",
            "vite.config.js",
            "next.config.js",
            "vue.config.js",
            "nuxt.config.js",
            ".babelrc",
            "jest.config.js",
        ],
        frameworks: &[
            FrameworkRule {
                name: "React",
                triggers: &[
                    "react",
                    "react-dom",
                    "create-react-app",
                    "jsx",
                ],
            },
            FrameworkRule {
                name: "Next.js",
                triggers: &["next", "next.config", "pages", "app"],
            },
            FrameworkRule {
                name: "Vue.js",
                triggers: &["vue", "@vue", "vuex", "vue-router"],
            },
            FrameworkRule {
                name: "Nuxt.js",
                triggers: &["nuxt", "nuxt.config"],
            },
            FrameworkRule {
                name: "Angular",
                triggers: &["@angular/core", "angular.json"],
            },
            FrameworkRule {
                name: "Express",
                triggers: &["express", "app.use", "app.listen"],
            },
            FrameworkRule {
                name: "NestJS",
                triggers: &["@nestjs/core", "@nestjs/common"],
            },
            FrameworkRule { name: "Fastify", triggers: &["fastify"] },
            FrameworkRule { name: "Koa", triggers: &["koa"] },
            FrameworkRule {
                name: "Svelte",
                triggers: &["svelte", "svelte.config"],
            },
            FrameworkRule {
                name: "Gatsby",
                triggers: &["gatsby", "gatsby-config"],
            },
            FrameworkRule { name: "Electron", triggers: &["electron"] },
        ],
        framework_source: FrameworkSource::DependencyManifest {
            file: "package.json",
            sections: &["dependencies", "devDependencies"],
        },
        content: &[
            ContentRule {
                file_pattern: "package.json",
                substrings: &[
                    "\"react\":",
                    "\"next\":",
                    "\"vue\":",
                    "\"express\":",
                    "\"@nestjs/core\":",
                    "\"angular\":",
                    "\"svelte\":",
                    "\"gatsby\":",
                    "\"electron\":",
                ],
            },
            ContentRule {
                file_pattern: "*.jsx",
                substrings: &[
                    "import React",
                    "from 'react'",
                    "export default",
                ],
            },
            ContentRule {
                file_pattern: "*.tsx",
                substrings: &[
                    "import React",
                    "from 'react'",
                    "interface",
                    "type",
                ],
            },
        ],
        build_tool: BuildToolRule::NodeLockFiles,
        build_commands: &[
            CommandRule {
                tool: BuildTool::Npm,
                command: "npm run build",
            },
            CommandRule {
                tool: BuildTool::Yarn,
                command: "yarn build",
            },
            CommandRule {
                tool: BuildTool::Pnpm,
                command: "pnpm build",
            },
        ],
        install_command: None,
    },
    RuleSet {
        platform: Platform::Python,
        primary: &[
            "requirements.txt",
            "pyproject.toml",
            "setup.py",
            "Pipfile",
            "poetry.lock",
        ],
        secondary: &[
            "manage.py",
            "app.py",
            "main.py",
            "__init__.py",
            "setup.cfg",
            "Pipfile.lock",
            "tox.ini",
            "pytest.ini",
        ],
        structure: &["src", "tests", "docs"],
        config_files: &[
            "setup.cfg",
            "pyproject.toml",
            "tox.ini",
            ".flake8",
            "mypy.ini",
        ],
        frameworks: &[
            FrameworkRule {
                name: "Django",
                triggers: &[
                    "django",
                    "manage.py",
                    "settings.py",
                    "urls.py",
                    "wsgi.py",
                ],
            },
            FrameworkRule {
                name: "Flask",
                triggers: &[
                    "flask",
                    "Flask",
                    "app.py",
                    "from flask import",
                ],
            },
            FrameworkRule {
                name: "FastAPI",
                triggers: &[
                    "fastapi",
                    "FastAPI",
                    "uvicorn",
                    "from fastapi import",
                ],
            },
            FrameworkRule { name: "Tornado", triggers: &["tornado"] },
            FrameworkRule { name: "Pyramid", triggers: &["pyramid"] },
            FrameworkRule { name: "Bottle", triggers: &["bottle"] },
            FrameworkRule {
                name: "Streamlit",
                triggers: &["streamlit", "st."],
            },
            FrameworkRule {
                name: "Celery",
                triggers: &["celery", "from celery import"],
            },
            FrameworkRule {
                name: "Scrapy",
                triggers: &["scrapy", "scrapy.cfg"],
            },
            FrameworkRule {
                name: "Jupyter",
                triggers: &["jupyter", ".ipynb"],
            },
        ],
        framework_source: FrameworkSource::Descriptor(&[
            "requirements.txt",
            "pyproject.toml",
            "Pipfile",
        ]),
        content: &[
            ContentRule {
                file_pattern: "requirements.txt",
                substrings: &[
                    "django",
                    "flask",
                    "fastapi",
                    "tornado",
                    "pyramid",
                ],
            },
            ContentRule {
                file_pattern: "pyproject.toml",
                substrings: &["django", "flask", "fastapi", "poetry"],
            },
            ContentRule {
                file_pattern: "*.py",
                substrings: &[
                    "from django",
                    "from flask import",
                    "from fastapi import",
                    "FastAPI()",
                    "Flask(__name__)",
                ],
            },
        ],
        build_tool: BuildToolRule::Fixed(BuildTool::Pip),
        build_commands: &[],
        install_command: Some("pip install -r requirements.txt"),
    },
    RuleSet {
        platform: Platform::DotNet,
        primary: &["*.csproj", "*.sln", "*.fsproj", "*.vbproj"],
        secondary: &[
            "Program.cs",
            "Startup.cs",
            "appsettings.json",
            "appsettings.Development.json",
            "web.config",
            "nuget.config",
        ],
        structure: &[
            "Controllers",
            "Models",
            "Views",
            "Properties",
            "wwwroot",
        ],
        config_files: &[
            "appsettings.json",
            "launchSettings.json",
            "web.config",
        ],
        frameworks: &[
            FrameworkRule {
                name: "ASP.NET Core",
                triggers: &[
                    "Microsoft.AspNetCore",
                    "Startup.cs",
                    "Program.cs",
                ],
            },
            FrameworkRule {
                name: "ASP.NET MVC",
                triggers: &["System.Web.Mvc", "Controllers", "Views"],
            },
            FrameworkRule {
                name: "Blazor",
                triggers: &[
                    "Microsoft.AspNetCore.Components",
                    "Blazor",
                    ".razor",
                ],
            },
            FrameworkRule {
                name: "WPF",
                triggers: &["System.Windows", "App.xaml"],
            },
            FrameworkRule {
                name: "WinForms",
                triggers: &["System.Windows.Forms"],
            },
            FrameworkRule {
                name: "Console App",
                triggers: &["Program.cs", "static void Main"],
            },
            FrameworkRule {
                name: "Web API",
                triggers: &["ApiController", "Microsoft.AspNetCore.Mvc"],
            },
            FrameworkRule {
                name: "gRPC",
                triggers: &["Grpc.AspNetCore", ".proto"],
            },
        ],
        framework_source: FrameworkSource::FilePaths,
        content: &[
            ContentRule {
                file_pattern: "*.csproj",
                substrings: &[
                    "Microsoft.NET.Sdk.Web",
                    "Microsoft.AspNetCore",
                    "Microsoft.EntityFrameworkCore",
                ],
            },
            ContentRule {
                file_pattern: "Program.cs",
                substrings: &[
                    "WebApplication.CreateBuilder",
                    "app.Run()",
                    "static void Main",
                ],
            },
        ],
        build_tool: BuildToolRule::Fixed(BuildTool::Dotnet),
        build_commands: &[CommandRule {
            tool: BuildTool::Dotnet,
            command: "dotnet build",
        }],
        install_command: None,
    },
    RuleSet {
        platform: Platform::Go,
        primary: &["go.mod"],
        secondary: &["go.sum", "main.go", "Makefile"],
        structure: &["cmd", "pkg", "internal", "api"],
        config_files: &["go.work", ".golangci.yml"],
        frameworks: &[
            FrameworkRule {
                name: "Gin",
                triggers: &[
                    "gin-gonic/gin",
                    "gin.Default()",
                    "gin.Engine",
                ],
            },
            FrameworkRule {
                name: "Echo",
                triggers: &["labstack/echo", "echo.New()"],
            },
            FrameworkRule {
                name: "Fiber",
                triggers: &["gofiber/fiber"],
            },
            FrameworkRule { name: "Chi", triggers: &["go-chi/chi"] },
            FrameworkRule {
                name: "Gorilla Mux",
                triggers: &["gorilla/mux"],
            },
            FrameworkRule { name: "Beego", triggers: &["beego"] },
            FrameworkRule {
                name: "Buffalo",
                triggers: &["gobuffalo/buffalo"],
            },
            FrameworkRule {
                name: "Standard",
                triggers: &["net/http", "http.ListenAndServe"],
            },
        ],
        framework_source: FrameworkSource::Descriptor(&["go.mod"]),
        content: &[
            ContentRule {
                file_pattern: "go.mod",
                substrings: &[
                    "gin-gonic",
                    "labstack/echo",
                    "gofiber",
                    "go-chi",
                    "gorilla/mux",
                ],
            },
            ContentRule {
                file_pattern: "*.go",
                substrings: &[
                    "package main",
                    "func main()",
                    "import (",
                ],
            },
        ],
        build_tool: BuildToolRule::Fixed(BuildTool::Go),
        build_commands: &[CommandRule {
            tool: BuildTool::Go,
            command: "go build",
        }],
        install_command: None,
    },
    RuleSet {
        platform: Platform::Rust,
        primary: &["Cargo.toml"],
        secondary: &["Cargo.lock", "main.rs", "lib.rs"],
        structure: &["src", "tests", "benches"],
        config_files: &["rust-toolchain", ".cargo/config.toml"],
        frameworks: &[
            FrameworkRule {
                name: "Actix",
                triggers: &["actix-web", "actix_web"],
            },
            FrameworkRule { name: "Rocket", triggers: &["rocket"] },
            FrameworkRule { name: "Axum", triggers: &["axum"] },
            FrameworkRule { name: "Warp", triggers: &["warp"] },
            FrameworkRule { name: "Tokio", triggers: &["tokio"] },
        ],
        framework_source: FrameworkSource::Descriptor(&["Cargo.toml"]),
        content: &[
            ContentRule {
                file_pattern: "Cargo.toml",
                substrings: &[
                    "actix-web",
                    "rocket",
                    "axum",
                    "warp",
                    "tokio",
                ],
            },
            ContentRule {
                file_pattern: "*.rs",
                substrings: &[
                    "fn main()",
                    "use actix_web",
                    "use rocket",
                ],
            },
        ],
        build_tool: BuildToolRule::Fixed(BuildTool::Cargo),
        build_commands: &[CommandRule {
            tool: BuildTool::Cargo,
            command: "cargo build --release",
        }],
        install_command: None,
    },
    RuleSet {
        platform: Platform::Php,
        primary: &["composer.json"],
        secondary: &[
            "composer.lock",
            "index.php",
            "artisan",
            "wp-config.php",
        ],
        structure: &["vendor", "public", "app", "src"],
        config_files: &[".env", "config.php"],
        frameworks: &[
            FrameworkRule {
                name: "Laravel",
                triggers: &["laravel/framework", "artisan", "app/Http"],
            },
            FrameworkRule {
                name: "Symfony",
                triggers: &[
                    "symfony/symfony",
                    "symfony/framework-bundle",
                ],
            },
            FrameworkRule {
                name: "WordPress",
                triggers: &[
                    "wp-config.php",
                    "wp-content",
                    "wp-includes",
                ],
            },
            FrameworkRule {
                name: "CodeIgniter",
                triggers: &["codeigniter", "system/core"],
            },
            FrameworkRule {
                name: "CakePHP",
                triggers: &["cakephp/cakephp"],
            },
            FrameworkRule { name: "Yii", triggers: &["yiisoft/yii2"] },
        ],
        framework_source: FrameworkSource::DependencyManifest {
            file: "composer.json",
            sections: &["require", "require-dev"],
        },
        content: &[
            ContentRule {
                file_pattern: "composer.json",
                substrings: &[
                    "laravel/framework",
                    "symfony/symfony",
                    "cakephp",
                    "yiisoft",
                ],
            },
            ContentRule {
                file_pattern: "*.php",
                substrings: &["<?php", "namespace", "use Illuminate"],
            },
        ],
        build_tool: BuildToolRule::Fixed(BuildTool::Composer),
        build_commands: &[],
        install_command: Some("composer install"),
    },
    RuleSet {
        platform: Platform::Ruby,
        primary: &["Gemfile"],
        secondary: &["Gemfile.lock", "Rakefile", "config.ru"],
        structure: &["app", "config", "db", "lib"],
        config_files: &[
            "config/application.rb",
            "config/environment.rb",
        ],
        frameworks: &[
            FrameworkRule {
                name: "Ruby on Rails",
                triggers: &[
                    "rails",
                    "config/application.rb",
                    "app/controllers",
                ],
            },
            FrameworkRule { name: "Sinatra", triggers: &["sinatra"] },
            FrameworkRule { name: "Hanami", triggers: &["hanami"] },
            FrameworkRule {
                name: "Jekyll",
                triggers: &["jekyll", "_config.yml"],
            },
        ],
        framework_source: FrameworkSource::Descriptor(&["Gemfile"]),
        content: &[
            ContentRule {
                file_pattern: "Gemfile",
                substrings: &[
                    "gem 'rails'",
                    "gem 'sinatra'",
                    "gem 'jekyll'",
                ],
            },
            ContentRule {
                file_pattern: "*.rb",
                substrings: &[
                    "class ApplicationController",
                    "Rails.application",
                ],
            },
        ],
        build_tool: BuildToolRule::Fixed(BuildTool::Bundler),
        build_commands: &[],
        install_command: Some("bundle install"),
    },
];
