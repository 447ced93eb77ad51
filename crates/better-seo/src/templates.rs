/// Blog post skeletons for common article formats.
///
/// Each skeleton starts with a frontmatter block naming the configured SEO
/// fields, followed by a single first-level heading and writing prompts.
use seo_engine::FieldConfig;

use crate::error::AppError;

pub struct PostTemplate {
    pub name: &'static str,
    sections: &'static [&'static str],
}

pub const TEMPLATES: &[PostTemplate] = &[
    PostTemplate {
        name: "List Post",
        sections: &[
            "# 9 Ways to Get More Readers for Your Technical Blog\n\n\
             <small>\n\
             Lead with the number of items.\n\
             Name the outcome the reader wants.\n\
             </small>\n",
            "__Struggling to find an audience for the posts you put hours into?__\n",
            "__Intro__\n\n\
             - Keep the intro short.\n\
             - Earn trust in as few words as possible.\n\
             - Add a table of contents with jump links:\n\n\
             [Write H2 subheadings that promise a benefit](#)\n\
             [Cross-post where your readers already are](#)\n",
            "## 1. Write H2 subheadings that promise a benefit\n\n\
             - Number the items\n\
             - Make each one about what the reader gains\n\
             - **Example:** _Cross-post where your readers already are_\n",
            "## Final Thoughts\n\n\
             The closing heading carries no number.\n\
             Give one or two _final tips_ and keep it short.\n\n\
             In this post, I've ...\n",
        ],
    },
    PostTemplate {
        name: "Step by Step",
        sections: &[
            "# How to Publish a Markdown Blog in Three Simple Steps\n\n\
             <small>\n\
             Use the 'How to' format.\n\
             Mention the _desired outcome_.\n\
             State the number of steps.\n\
             </small>\n",
            "**Want to share what you learn without fighting your tooling? \
             The trick is a setup that stays out of your way.**\n\n\
             This is the workflow I use to publish regularly while spending my time on the writing itself.\n\n\
             ----\n\n\
             - Show that you understand the **problem**\n\
             - Present the **solution**, briefly\n\
             - Show **proof** that the solution works\n",
            "## Step 1. Pick an editor with the right extensions\n\n\
             - Use H2 subheadings\n\
             - **Number** the steps\n\
             - Start each step with a **present-tense verb**\n\n\
             Your workflow is only as good as your tools. Let's look at the ones that help most.\n",
            "## Final Thoughts\n\n\
             - Summarize the **key points**\n\
             - Keep it short\n",
        ],
    },
    PostTemplate {
        name: "Expanded Definition",
        sections: &[
            "# What is Technical SEO? A Plain-Language Explanation\n\n\
             <small>\n\
             Open with **what is/are**.\n\
             Add **context**.\n\
             </small>\n",
            "**Technical SEO is the work of making a site easy for search engines to crawl, \
             understand and rank.**\n\n\
             The easier your pages are to process, the more often they show up for relevant searches.\n\n\
             - Open with **the definition**\n\
             - Keep it short\n\
             - Add a **table of contents** with jump links\n",
            "## Why does technical SEO matter?\n\n\
             Great content that search engines cannot read never reaches its audience.\n\n\
             - Research what readers ask next\n\
             - Use an H2 subheading for each **question**\n\
             - Answer each one directly\n",
            "## Final Thoughts\n\n\
             - Summarize the **key points**\n\
             - Link to **further resources**\n",
        ],
    },
    PostTemplate {
        name: "Beginners Guide",
        sections: &[
            "# Rust for Beginners: Where to Start\n\n\
             <small>\n\
             - Name the **topic**\n\
             - Say that it is **for beginners**\n\
             - Keep it simple\n\
             </small>\n",
            "**If you want code that keeps working once it compiles, Rust is worth learning.**\n\
             The learning curve is real, but it pays off in fast, reliable programs.\n",
            "## What do you need to write your first Rust program?\n\n\
             - Research what beginners actually ask\n\
             - Use an H2 subheading for each **question**\n\
             - Give the **answers**\n",
            "## Final Thoughts\n\n\
             Once the foundations click, the compiler becomes your safety net.\n\n\
             - Offer some **final encouragement**\n\
             - Link to **further resources**\n",
        ],
    },
];

pub fn template_names() -> Vec<String> {
    TEMPLATES.iter().map(|template| template.name.to_string()).collect()
}

pub fn find_template(name: &str) -> Result<&'static PostTemplate, AppError> {
    let wanted = name.trim();
    TEMPLATES
        .iter()
        .find(|template| template.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| AppError::UnknownTemplate(wanted.to_string()))
}

impl PostTemplate {
    /// Frontmatter skeleton followed by the post body.
    pub fn render(&self, fields: &FieldConfig, keywords: &[String]) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("{}: \"\"\n", yaml_string(&fields.seo_title_field)));
        out.push_str(&format!("{}: \"\"\n", yaml_string(&fields.seo_description_field)));
        if keywords.is_empty() {
            out.push_str("keywords: []\n");
        } else {
            out.push_str("keywords:\n");
            for keyword in keywords {
                out.push_str(&format!("  - {}\n", yaml_string(keyword)));
            }
        }
        out.push_str("---\n");
        out.push_str(&self.sections.join("\n"));
        out
    }
}

/// JSON strings are valid double-quoted YAML scalars.
fn yaml_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
