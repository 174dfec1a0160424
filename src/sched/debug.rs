//! Ferramentas de visualização do estado da simulação

use crate::core::context::SimContext;

/// Imprime a tabela de estado de todas as threads.
///
/// Consome apenas o snapshot somente-leitura do registro; é a superfície de
/// observação chamada pelo escalonador ao fim de cada turno e pelo driver
/// na inicialização. Diferente da narração, a tabela é o produto da
/// ferramenta e não é filtrada por nível de log.
pub fn dump_threads(ctx: &SimContext) {
    println!();
    println!("-------------------------------------------------------------");
    println!("| TID |   STATE    | CPU USED | BURST |     WAITING ON      |");
    println!("-------------------------------------------------------------");

    for t in ctx.snapshot() {
        println!(
            "| {:>3} | {:<10} | {:>8} | {:>5} | {:<19} |",
            t.tid.to_string(),
            t.state.to_string(),
            t.cpu_used,
            t.burst_time,
            ctx.wait_label(t.waiting_on),
        );
    }

    println!("-------------------------------------------------------------");
}
