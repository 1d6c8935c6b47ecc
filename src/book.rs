//! Book layout
//!
//! The chapter lists, ignore keywords and metadata headers of every output
//! format, compiled in. Each format reads its own [`Profile`].

use clap::ValueEnum;
use std::fmt;

/// A language variant of the book's source tree
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// English
    #[value(name = "en-us")]
    EnUs,
    /// Simplified Chinese
    #[value(name = "zh-cn")]
    ZhCn,
}

impl Locale {
    /// Directory name of this locale under the book and site roots
    pub fn dir_name(self) -> &'static str {
        match self {
            Locale::EnUs => "en-us",
            Locale::ZhCn => "zh-cn",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Chapters and filtering rules for one output format
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    /// Chapter filenames, in book order
    pub chapters: &'static [&'static str],
    /// A line containing any of these is dropped
    pub ignores: &'static [&'static str],
    /// Front matter written before the first chapter
    pub header: Option<&'static str>,
}

/// Chapters shared by every format that splits the appendix in two
pub const CHAPTERS: &[&str] = &[
    "00-preface.md",
    "01-intro.md",
    "02-usability.md",
    "03-runtime.md",
    "04-containers.md",
    "05-pointers.md",
    "06-regex.md",
    "07-thread.md",
    "08-filesystem.md",
    "09-others.md",
    "10-cpp20.md",
    "appendix1.md",
    "appendix2.md",
];

/// The English PDF ships a single combined appendix
pub const CHAPTERS_SINGLE_APPENDIX: &[&str] = &[
    "00-preface.md",
    "01-intro.md",
    "02-usability.md",
    "03-runtime.md",
    "04-containers.md",
    "05-pointers.md",
    "06-regex.md",
    "07-thread.md",
    "08-filesystem.md",
    "09-others.md",
    "10-cpp20.md",
    "appendix.md",
];

const HEADER_EN_US: &str = r#"---
title: "C++11/14/17 On the Fly"
author: Changkun Ou <hi@changkun.us>
copyright: cc-by-nc-nd 4.0
---
"#;

const HEADER_ZH_CN: &str = r#"---
title: "现代 C++ 教程：高速上手 C++11/14/17/20"
author: 欧长坤 <hi[at]changkun.de>
copyright: cc-by-nc-nd 4.0
---
"#;

/// E-book sources, one file per chapter
pub const EPUB: Profile = Profile {
    chapters: CHAPTERS,
    ignores: &["TOC", "Table of Content", "License", "license"],
    header: None,
};

/// Website content tree, both locales
pub const WEBSITE: Profile = Profile {
    chapters: CHAPTERS,
    ignores: &[
        "TOC",
        "返回目录",
        "许可",
        "license",
        "Table of Content",
        "License",
    ],
    header: None,
};

/// Locales of the website, in build order
pub const WEBSITE_LOCALES: &[Locale] = &[Locale::ZhCn, Locale::EnUs];

/// Single-document PDF source for `locale`
pub fn pdf_profile(locale: Locale) -> Profile {
    match locale {
        Locale::EnUs => Profile {
            chapters: CHAPTERS_SINGLE_APPENDIX,
            ignores: &["TOC", "Return to TOC", "License", "license"],
            header: Some(HEADER_EN_US),
        },
        Locale::ZhCn => Profile {
            chapters: CHAPTERS,
            ignores: &["TOC", "返回目录", "许可", "license"],
            header: Some(HEADER_ZH_CN),
        },
    }
}
