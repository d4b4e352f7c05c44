//! Test fixtures for report parser testing
//!
//! This module provides sample report documents shared by the parser test
//! modules.


/// Header line using the source-sheet column names
pub const SOURCE_HEADER: &str = "Fecha,Horario (UTC),Localidad,Departamento,\
Tipo de fenómeno CORR (Granizo/Ráfaga/Tornado),Intensidad / Tamaño / Escala,\
Verificación (Si/No),Nivel de calidad (1-3),Latitud,Longitud,\
Descripción / Información adicional,Observador";

/// Helper to create a complete report document
pub fn create_test_report() -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}",
        SOURCE_HEADER,
        r#"20240115,18:30,"Las Piedras","Canelones",Granizo,"2 - 4",si,1,-34.7302,-56.2192,"Granizo del tamaño de una nuez",Ana"#,
        r#"20240203,21:00,Young,"Río Negro",RÁFAGA,"90 km/h",NO,2,-32.6980,-57.6263,"Árboles caídos",Luis"#,
        r#"2024-03-01,03:15,Tarariras,Colonia,Tornado,F1,SI,3,-34.2665,-57.6164,"Daños en galpones",Marta"#,
        r#"20240420,,Rocha,Rocha,Nube embudo,N/S,,x,,,,"#,
    )
}

/// Helper to create a header-only report document
pub fn create_header_only_report() -> String {
    format!("{}\n", SOURCE_HEADER)
}
