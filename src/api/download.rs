//! Binary download handling.

/// A downloaded file: the payload plus the name the backend suggested
/// (or the caller's fallback when the header was absent or malformed).
#[derive(Debug, Clone)]
pub struct Descarga {
    pub nombre_archivo: String,
    pub datos: Vec<u8>,
}

/// Extract the filename from a `Content-Disposition` header value.
///
/// Accepts both quoted (`filename="reporte.csv"`) and bare
/// (`filename=reporte.csv`) forms, case-insensitively. A quoted name
/// ends at the closing quote, a bare one at the next `;`. Returns
/// `None` when no filename parameter is present or it is empty.
#[must_use]
pub fn nombre_de_content_disposition(valor: &str) -> Option<String> {
    let minusculas = valor.to_ascii_lowercase();
    let inicio = minusculas.find("filename=")? + "filename=".len();
    let resto = valor.get(inicio..)?;

    // A semicolon is legal inside a quoted filename; only the closing
    // quote ends it. Bare filenames end at the next parameter.
    let nombre = match resto.strip_prefix('"') {
        Some(citado) => citado.split('"').next()?,
        None => resto.split(';').next()?.trim(),
    };

    if nombre.is_empty() {
        None
    } else {
        Some(nombre.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_citado() {
        let valor = "attachment; filename=\"reporte_2025.csv\"";

        assert_eq!(
            nombre_de_content_disposition(valor).as_deref(),
            Some("reporte_2025.csv")
        );
    }

    #[test]
    fn filename_sin_comillas() {
        let valor = "attachment; filename=pedidos.csv; size=120";

        assert_eq!(
            nombre_de_content_disposition(valor).as_deref(),
            Some("pedidos.csv")
        );
    }

    #[test]
    fn filename_citado_con_punto_y_coma() {
        let valor = "attachment; filename=\"reporte; enero.csv\"; size=120";

        assert_eq!(
            nombre_de_content_disposition(valor).as_deref(),
            Some("reporte; enero.csv")
        );
    }

    #[test]
    fn filename_insensible_a_mayusculas() {
        let valor = "Attachment; FILENAME=\"Reporte.CSV\"";

        assert_eq!(
            nombre_de_content_disposition(valor).as_deref(),
            Some("Reporte.CSV")
        );
    }

    #[test]
    fn sin_filename() {
        assert!(nombre_de_content_disposition("attachment").is_none());
    }

    #[test]
    fn filename_vacio() {
        assert!(nombre_de_content_disposition("attachment; filename=\"\"").is_none());
    }
}
