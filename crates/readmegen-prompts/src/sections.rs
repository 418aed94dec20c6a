/// One mandatory README section, as described to the model.
#[derive(Debug, Clone, Copy)]
pub struct RequiredSection {
    /// Bolded heading in the ordered list.
    pub title: &'static str,
    /// Trailing note printed after the heading, e.g. " (Jika Ada)".
    pub note: &'static str,
    /// Table of Contents entry as (label, anchor), if the section is linked.
    pub toc: Option<(&'static str, &'static str)>,
    pub guidance: &'static [&'static str],
    /// Whether the example Table of Contents block is rendered under this section.
    pub shows_toc: bool,
}

pub const REQUIRED_SECTIONS: &[RequiredSection] = &[
    RequiredSection {
        title: "Title (H1)",
        note: "",
        toc: None,
        guidance: &["Judul utama proyek"],
        shows_toc: false,
    },
    RequiredSection {
        title: "Project Overview (3–4 paragraf)",
        note: "",
        toc: Some(("About", "about")),
        guidance: &[
            "Deskripsi tentang apa yang dilakukan proyek",
            "Tujuan, audiens, dan manfaat utama",
        ],
        shows_toc: false,
    },
    RequiredSection {
        title: "Table of Contents",
        note: "",
        toc: None,
        guidance: &["Susun dengan tautan internal ke setiap bagian:"],
        shows_toc: true,
    },
    RequiredSection {
        title: "Features",
        note: "",
        toc: Some(("Features", "features")),
        guidance: &["Gunakan bullet points dan berikan kalimat penjelas di setiap fitur"],
        shows_toc: false,
    },
    RequiredSection {
        title: "Technology Stack",
        note: "",
        toc: Some(("Technology Stack", "technology-stack")),
        guidance: &[
            "Pisahkan per kategori, misalnya: Frontend, Backend, Database, dsb.",
            "Berikan keterangan singkat per teknologi",
        ],
        shows_toc: false,
    },
    RequiredSection {
        title: "Prerequisites",
        note: "",
        toc: Some(("Prerequisites", "prerequisites")),
        guidance: &[
            "Berisi software apa saja yang dibutuhkan sebelum instalasi (Node, npm, pnpm, dsb.)",
        ],
        shows_toc: false,
    },
    RequiredSection {
        title: "Step-by-step Installation Instructions",
        note: "",
        toc: Some(("Installation", "installation")),
        guidance: &[
            "Gunakan blok kode ```bash``` atau ```powershell``` di setiap langkah \
             (clone repo, install dependencies, setup environment, dsb.)",
        ],
        shows_toc: false,
    },
    RequiredSection {
        title: "Usage Guide",
        note: "",
        toc: Some(("Usage Guide", "usage-guide")),
        guidance: &[
            "Sertakan contoh cara menjalankan aplikasi, serta penjelasan singkat bagaimana penggunaannya",
            "Jika memerlukan environment variable, sertakan di blok ```env```",
        ],
        shows_toc: false,
    },
    RequiredSection {
        title: "API Documentation",
        note: " (Jika Ada)",
        toc: Some(("API Documentation", "api-documentation")),
        guidance: &[
            "Paparkan endpoints, metode HTTP, dan contoh request/response (dalam blok kode)",
            "Berikan penjelasan singkat di setiap endpoint",
        ],
        shows_toc: false,
    },
    RequiredSection {
        title: "Contributing Guidelines",
        note: "",
        toc: Some(("Contributing Guidelines", "contributing-guidelines")),
        guidance: &["Jelaskan cara kontribusi (fork, branch, pull request, dsb.)"],
        shows_toc: false,
    },
    RequiredSection {
        title: "License Information",
        note: "",
        toc: Some(("License", "license")),
        guidance: &["Sebutkan lisensi, misalnya MIT, Apache, dsb."],
        shows_toc: false,
    },
    RequiredSection {
        title: "Contact/Support Details",
        note: "",
        toc: Some(("Contact/Support Information", "contactsupport-information")),
        guidance: &["Sertakan info kontak atau link dukungan"],
        shows_toc: false,
    },
];

/// Append the mandatory section ordering, numbered from 1.
pub fn append_sections(prompt: &mut String) {
    prompt.push_str("## Urutan Bagian Wajib dalam README:\n\n");
    for (i, section) in REQUIRED_SECTIONS.iter().enumerate() {
        let marker = format!("{}. ", i + 1);
        let indent = " ".repeat(marker.len());
        prompt.push_str(&format!("{marker}**{}**{}\n", section.title, section.note));
        for line in section.guidance {
            prompt.push_str(&format!("{indent}- {line}\n"));
        }
        if section.shows_toc {
            append_toc_example(prompt, &format!("{indent}  "));
        }
        prompt.push('\n');
    }
}

/// Example Table of Contents block, one link per linked section.
fn append_toc_example(prompt: &mut String, indent: &str) {
    prompt.push_str(&format!("{indent}```md\n"));
    prompt.push_str(&format!("{indent}## Table of Contents\n"));
    for (label, anchor) in REQUIRED_SECTIONS.iter().filter_map(|s| s.toc) {
        prompt.push_str(&format!("{indent}- [{label}](#{anchor})\n"));
    }
    prompt.push_str(&format!("{indent}```\n"));
}
