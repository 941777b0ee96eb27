//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) für Kurvendokumente sind hier zentralisiert.

use crate::app::CurveModel;
use crate::core::StorageError;
use crate::reducer::ReducerRegistry;
use anyhow::Context;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Lädt eine Datei in das Modell.
///
/// Das Dokument wird vollständig neu aufgebaut und erst bei Erfolg
/// eingesetzt; schlägt das Laden fehl, bleibt das Modell unverändert.
pub fn load_file(
    model: &mut CurveModel,
    path: impl AsRef<Path>,
    registry: &ReducerRegistry,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let xml_content =
        fs::read_to_string(path).map_err(|err| StorageError::resource(path, err))?;
    let document = crate::xml::parse_curve_document(&xml_content, registry)
        .with_context(|| format!("Datei {} konnte nicht geladen werden", path.display()))?;

    log::info!(
        "Loaded CurveDocument: {} points, {} reduced curves",
        document.base_curve.point_count(),
        document.reduced_curve_count()
    );

    model.replace_document(document);
    model.file_path = Some(path.to_path_buf());
    Ok(())
}

/// Speichert das Modell unter dem angegebenen Pfad und merkt sich den Pfad.
pub fn save_file(
    model: &mut CurveModel,
    path: impl AsRef<Path>,
    registry: &ReducerRegistry,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    write_document_to_file(model, path, registry)?;
    model.file_path = Some(path.to_path_buf());
    log::info!("File saved as: {}", path.display());
    Ok(())
}

/// Speichert unter dem bekannten Pfad.
///
/// Gibt `false` zurück, wenn noch kein Pfad bekannt ist (Speichern unter … nötig).
pub fn save_current_file(model: &mut CurveModel, registry: &ReducerRegistry) -> anyhow::Result<bool> {
    let Some(path) = model.file_path.clone() else {
        return Ok(false);
    };
    write_document_to_file(model, &path, registry)?;
    log::info!("File saved successfully");
    Ok(true)
}

/// Serialisiert das Dokument und schreibt es in eine Datei.
fn write_document_to_file(
    model: &CurveModel,
    path: &Path,
    registry: &ReducerRegistry,
) -> anyhow::Result<()> {
    let xml_content = crate::xml::write_curve_document(&model.document, registry)
        .with_context(|| format!("Dokument fuer {} nicht speicherbar", path.display()))?;

    if model.options.atomic_save {
        write_atomically(path, &xml_content)?;
    } else {
        fs::write(path, &xml_content).map_err(|err| StorageError::resource(path, err))?;
    }

    log::info!(
        "Saved CurveDocument: {} points, {} reduced curves -> {}",
        model.document.base_curve.point_count(),
        model.document.reduced_curve_count(),
        path.display()
    );
    Ok(())
}

/// Schreibt `content` in eine Geschwister-Datei und benennt sie danach um.
///
/// Ein Abbruch hinterlässt die Zieldatei unverändert.
fn write_atomically(path: &Path, content: &str) -> Result<(), StorageError> {
    let tmp_path = temp_sibling(path)?;

    if let Err(err) = write_and_sync(&tmp_path, content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StorageError::resource(tmp_path, err));
    }

    fs::rename(&tmp_path, path).map_err(|err| {
        let _ = fs::remove_file(&tmp_path);
        StorageError::resource(path, err)
    })
}

fn write_and_sync(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

/// `kurve.plist` → `kurve.plist.tmp` im selben Verzeichnis.
fn temp_sibling(path: &Path) -> Result<PathBuf, StorageError> {
    let file_name = path.file_name().ok_or_else(|| {
        StorageError::Invariant(format!("Pfad ohne Dateinamen: {}", path.display()))
    })?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_sibling_appends_suffix() {
        let tmp = temp_sibling(Path::new("/data/kurve.plist")).unwrap();
        assert_eq!(tmp, PathBuf::from("/data/kurve.plist.tmp"));
    }

    #[test]
    fn test_temp_sibling_rejects_directory_root() {
        assert!(temp_sibling(Path::new("/")).is_err());
    }

    #[test]
    fn test_save_current_file_without_path_does_nothing() {
        let registry = ReducerRegistry::with_builtin_reducers();
        let mut model = CurveModel::new();
        assert!(!save_current_file(&mut model, &registry).unwrap());
    }
}
