//! Built-in JSLy site configuration.

use super::app_config::{
    AppConfig, AsideConfig, FooterConfig, HeaderConfig, Logo, MainConfig, SearchConfig, SiteMeta,
    Theme, ThemeColor, TocConfig,
};
use super::code_icon::CodeIconMap;
use super::link::{ExternalLink, LinkTarget, NavGroup, NavLink};

const SOCIAL_IMAGE: &str = "https://i.imgur.com/aNVf3mG.png";
const TEMPLATE_REPO: &str = "https://github.com/huntermacias/nextjs-tailwind-template";

const CODE_ICONS: &[(&str, &str)] = &[
    ("package.json", "vscode-icons:file-type-node"),
    ("tsconfig.json", "vscode-icons:file-type-tsconfig"),
    (".npmrc", "vscode-icons:file-type-npm"),
    (".editorconfig", "vscode-icons:file-type-editorconfig"),
    (".eslintrc", "vscode-icons:file-type-eslint"),
    (".eslintrc.cjs", "vscode-icons:file-type-eslint"),
    (".eslintignore", "vscode-icons:file-type-eslint"),
    ("eslint.config.js", "vscode-icons:file-type-eslint"),
    ("eslint.config.mjs", "vscode-icons:file-type-eslint"),
    ("eslint.config.cjs", "vscode-icons:file-type-eslint"),
    (".gitignore", "vscode-icons:file-type-git"),
    ("yarn.lock", "vscode-icons:file-type-yarn"),
    (".env", "vscode-icons:file-type-dotenv"),
    (".env.example", "vscode-icons:file-type-dotenv"),
    (".vscode/settings.json", "vscode-icons:file-type-vscode"),
    ("nuxt", "vscode-icons:file-type-nuxt"),
    (".nuxtrc", "vscode-icons:file-type-nuxt"),
    (".nuxtignore", "vscode-icons:file-type-nuxt"),
    ("nuxt.config.js", "vscode-icons:file-type-nuxt"),
    ("nuxt.config.ts", "vscode-icons:file-type-nuxt"),
    ("nuxt.schema.ts", "vscode-icons:file-type-nuxt"),
    ("tailwind.config.js", "vscode-icons:file-type-tailwind"),
    ("tailwind.config.ts", "vscode-icons:file-type-tailwind"),
    ("vscode", "vscode-icons:file-type-vscode"),
    ("vue", "vscode-icons:file-type-vue"),
    ("ts", "vscode-icons:file-type-typescript"),
    ("tsx", "vscode-icons:file-type-typescript"),
    ("mjs", "vscode-icons:file-type-js"),
    ("cjs", "vscode-icons:file-type-js"),
    ("js", "vscode-icons:file-type-js"),
    ("jsx", "vscode-icons:file-type-js"),
    ("md", "vscode-icons:file-type-markdown"),
    ("mdc", "vscode-icons:file-type-markdown"),
    ("py", "vscode-icons:file-type-python"),
    ("npm", "vscode-icons:file-type-npm"),
    ("pnpm", "vscode-icons:file-type-pnpm"),
    ("npx", "vscode-icons:file-type-npm"),
    ("yarn", "vscode-icons:file-type-yarn"),
    ("bun", "vscode-icons:file-type-bun"),
    ("yml", "vscode-icons:file-type-yaml"),
    ("json", "vscode-icons:file-type-json"),
    ("Dockerfile", "vscode-icons:file-type-docker"),
];

impl AppConfig {
    /// The JSLy documentation portal configuration.
    pub fn jsly() -> Self {
        Self {
            site: SiteMeta {
                title: "JSLy - The Ultimate JavaScript Documentation Portal".to_string(),
                og_title: "JSLy - The Ultimate JavaScript Docs".to_string(),
                description: "Dive into JSLy: Your go-to resource for comprehensive JavaScript \
                              tutorials, guides, and interactive learning."
                    .to_string(),
                og_description: "Discover JSLy: The ultimate hub for JavaScript documentation, \
                                 featuring in-depth tutorials, real-time search, and \
                                 user-contributed content."
                    .to_string(),
                og_image: SOCIAL_IMAGE.to_string(),
                twitter_card: SOCIAL_IMAGE.to_string(),
            },
            theme: Theme {
                customizable: true,
                color: ThemeColor::Zinc,
                radius: 0.5,
            },
            header: HeaderConfig {
                title: "JSLy".to_string(),
                show_title: true,
                logo: Logo {
                    light: "/logo.svg".to_string(),
                    dark: "/logo-dark.svg".to_string(),
                },
                dark_mode_toggle: true,
                nav: vec![NavGroup {
                    title: "Docs".to_string(),
                    links: vec![
                        NavLink {
                            title: "Getting Started".to_string(),
                            to: "/getting-started".to_string(),
                            description: "Start mastering JavaScript with JSLy".to_string(),
                            target: None,
                        },
                        NavLink {
                            title: "API".to_string(),
                            to: "/api".to_string(),
                            description: "Discover the configurations and exposed APIs."
                                .to_string(),
                            target: Some(LinkTarget::SelfTarget),
                        },
                    ],
                }],
                links: vec![
                    ExternalLink::icon("lucide:github", "https://github.com/huntermacias/"),
                    ExternalLink::icon("lucide:twitter", "https://twitter.com/huntermacias_"),
                    ExternalLink::icon(
                        "lucide:linkedin",
                        "https://www.linkedin.com/in/huntermacias/",
                    ),
                ],
            },
            aside: AsideConfig {
                use_level: true,
                collapse: false,
            },
            main: MainConfig {
                bread_crumb: true,
                show_title: true,
                code_copy_toast: true,
                code_icon: CODE_ICONS.iter().copied().collect::<CodeIconMap>(),
            },
            footer: FooterConfig {
                credits: "Copyright © 2024".to_string(),
                links: vec![
                    ExternalLink::titled("JSLy", "https://js-ly2.vercel.app"),
                    ExternalLink::icon("lucide:github", TEMPLATE_REPO),
                ],
            },
            toc: TocConfig {
                enable: true,
                title: "On This Page".to_string(),
                links: vec![
                    ExternalLink::icon("lucide:star", TEMPLATE_REPO).with_title("Star on GitHub"),
                    ExternalLink::icon("lucide:circle-dot", format!("{TEMPLATE_REPO}/issues"))
                        .with_title("Create Issues"),
                ],
            },
            search: SearchConfig {
                enable: true,
                in_aside: false,
            },
        }
    }
}
