//! Tipos de archivo del workflow de alineamiento y QC.

use crate::typed_file;

typed_file!(
    /// Reporte flagstat de un alineamiento.
    FlagstatsFile => Flagstats
);

typed_file!(
    /// Distribución de tamaños de inserto (texto).
    InsertSizesTextFile => InsertSizesText
);
