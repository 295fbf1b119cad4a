// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shell-style brace expansion.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

static INNER_GROUP: OnceLock<Regex> = OnceLock::new();

fn inner_group() -> &'static Regex {
    INNER_GROUP.get_or_init(|| Regex::new(r"\{([^{}]*)\}").expect("valid group pattern"))
}

fn first_group(text: &str) -> Option<(std::ops::Range<usize>, &str)> {
    let caps = inner_group().captures(text)?;
    let whole = caps.get(0)?;
    let body = caps.get(1)?;
    Some((whole.range(), body.as_str()))
}

/// Lazy expansion of every `{a,b,...}` group in a pattern.
///
/// Works innermost-group first over an explicit stack, so sibling options
/// surface in reverse writing order. Spellings that collapse to the same
/// text are reported once.
pub struct BraceExpansion {
    pending: Vec<String>,
    seen: HashSet<String>,
}

/// Expands `pattern` into the full set of spellings it describes.
pub fn expand(pattern: &str) -> BraceExpansion {
    BraceExpansion { pending: vec![pattern.to_owned()], seen: HashSet::new() }
}

impl Iterator for BraceExpansion {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(current) = self.pending.pop() {
            let Some((group, body)) = first_group(&current) else {
                if self.seen.insert(current.clone()) {
                    return Some(current);
                }
                continue;
            };

            for option in body.split(',') {
                let mut spelled = String::with_capacity(current.len() + option.len());
                spelled.push_str(&current[..group.start]);
                spelled.push_str(option);
                spelled.push_str(&current[group.end..]);
                self.pending.push(spelled);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let spellings: Vec<String> = expand("nothing to do").collect();
        assert_eq!(spellings, ["nothing to do"]);
    }

    #[test]
    fn single_group_surfaces_the_last_option_first() {
        let spellings: Vec<String> = expand("a{b,c}d").collect();
        assert_eq!(spellings, ["acd", "abd"]);
    }

    #[test]
    fn empty_option_drops_the_group() {
        let spellings: Vec<String> = expand("file{,s}").collect();
        assert_eq!(spellings, ["files", "file"]);
    }

    #[test]
    fn nested_groups_expand_inside_out() {
        let spellings: Vec<String> = expand("thumbnail.{png,jp{e,}g}").collect();
        assert_eq!(spellings, ["thumbnail.jpg", "thumbnail.png", "thumbnail.jpeg"]);
    }

    #[test]
    fn independent_groups_multiply() {
        let mut spellings: Vec<String> = expand("~/{Downloads,Pictures}/*.{jpg,gif,png}").collect();
        spellings.sort();
        assert_eq!(
            spellings,
            [
                "~/Downloads/*.gif",
                "~/Downloads/*.jpg",
                "~/Downloads/*.png",
                "~/Pictures/*.gif",
                "~/Pictures/*.jpg",
                "~/Pictures/*.png",
            ]
        );
    }

    #[test]
    fn duplicate_spellings_are_reported_once() {
        let spellings: Vec<String> = expand("{a,a}x").collect();
        assert_eq!(spellings, ["ax"]);
    }

    #[test]
    fn deeply_nested_alternations_cover_every_branch() {
        let mut spellings: Vec<String> = expand("It{{em,alic}iz,erat}e{d,}, please.").collect();
        spellings.sort();
        assert_eq!(
            spellings,
            [
                "Italicize, please.",
                "Italicized, please.",
                "Itemize, please.",
                "Itemized, please.",
                "Iterate, please.",
                "Iterated, please.",
            ]
        );
    }
}
