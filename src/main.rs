//! Crisol — Binário de Demonstração.
//!
//! Responsabilidade:
//! 1. Interpretar a linha de comando (política, quantum, seed).
//! 2. Montar o cenário padrão (4 threads, 3 semáforos, 1 monitor).
//! 3. Exibir a tabela inicial e entregar o controle ao escalonador.

use clap::{Parser, ValueEnum};

use crisol::sched::trigger::{RandomPolicy, ScriptedPolicy, TriggerPolicy};
use crisol::sched::{config, debug, run_round_robin};
use crisol::{serror, sinfo, SimContext};

/// Qual política de gatilho dirige a rodada
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    /// Script fixo que demonstra a semântica do monitor
    Scripted,
    /// Sorteio uniforme de waits/signals por tick
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "crisol", about = "Simulador didático de escalonamento round-robin")]
struct Cli {
    /// Política de disparo de operações de sincronização
    #[arg(long, value_enum, default_value = "scripted")]
    policy: PolicyKind,

    /// Ticks concedidos por turno
    #[arg(long, default_value_t = config::DEFAULT_QUANTUM)]
    quantum: u32,

    /// Seed do PRNG da política aleatória (padrão: sorteada)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    // Cenário clássico da demonstração: bursts e prioridades fixos.
    let mut ctx = SimContext::new();
    ctx.create_thread(10, 1); // Thread 0
    ctx.create_thread(10, 1); // Thread 1
    ctx.create_thread(8, 2); // Thread 2
    ctx.create_thread(7, 3); // Thread 3

    println!("\nInitial Thread States:");
    debug::dump_threads(&ctx);

    let mut policy: Box<dyn TriggerPolicy> = match cli.policy {
        PolicyKind::Scripted => Box::new(ScriptedPolicy::monitor_demo()),
        PolicyKind::Random => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            sinfo!("política aleatória com seed {seed}");
            Box::new(RandomPolicy::new(seed, config::DEFAULT_SEM_COUNT))
        }
    };

    if let Err(err) = run_round_robin(&mut ctx, cli.quantum, policy.as_mut()) {
        serror!("simulacao abortada: {err}");
        std::process::exit(1);
    }
}
