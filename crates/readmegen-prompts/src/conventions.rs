/// Formatting rules the generated README must follow, in the order they are
/// listed to the model.
pub const CONVENTIONS: &[&str] = &[
    "**Gunakan sintaks Markdown** dengan struktur judul dan subjudul yang rapi.",
    "**Pisahkan setiap perintah dalam blok kode terpisah** agar mudah disalin.",
    "**Berikan penjelasan singkat di setiap poin** (misalnya di Features, Technology Stack, \
     Usage Guide, API Documentation, dsb.) agar README.md lebih informatif.",
    "**Selalu sertakan struktur folder** (jika disediakan di input) dalam satu blok kode khusus \
     agar pembaca tahu di mana menempatkan file atau menemukan file tertentu.",
    "**Jangan lupa menambahkan contoh Environment Variables** dalam blok ```env``` terpisah, \
     jika di proyeknya ada variabel lingkungan.",
    "**Selalu sertakan Usage Guide** dan **API Documentation** (jika ada API), dengan penjelasan \
     singkat dan contoh endpoint/blok kode yang relevan.",
];

/// Append the numbered formatting rules.
pub fn append_conventions(prompt: &mut String) {
    prompt.push_str("## Penting:\n");
    for (i, rule) in CONVENTIONS.iter().enumerate() {
        prompt.push_str(&format!("{}. {rule}\n", i + 1));
    }
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventions_are_numbered_in_order() {
        let mut out = String::new();
        append_conventions(&mut out);
        assert!(out.starts_with("## Penting:\n1. **Gunakan sintaks Markdown**"));
        let separate = out.find("2. **Pisahkan setiap perintah").unwrap();
        let env = out.find("5. **Jangan lupa").unwrap();
        assert!(separate < env);
        assert!(out.contains("6. **Selalu sertakan Usage Guide**"));
    }

    #[test]
    fn conventions_cover_env_and_folder_blocks() {
        let mut out = String::new();
        append_conventions(&mut out);
        assert!(out.contains("```env```"));
        assert!(out.contains("struktur folder"));
        assert!(out.contains("blok kode khusus"));
    }
}
