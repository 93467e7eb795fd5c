// positivador-core/src/domain/compiler/quoter.rs

/// Double-quoted SQL identifier; embedded quotes are doubled.
/// Column names such as `Ativou em M?` or `Receita no Mês` need this.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
