//! # Orquestrador de Agendamento (Round-Robin)
//!
//! Laço de dispatch cooperativo: varre o registro de threads em ordem fixa
//! de id, concedendo a cada thread executável um quantum de ticks simulados.
//! Threads Blocked/Terminated são puladas em vez de fisicamente
//! re-enfileiradas — com o skip, a varredura em ordem fixa se comporta como
//! round-robin.
//!
//! ## Modelo de tick
//! Cada tick: incrementa `cpu_used`; se o burst foi consumido a thread
//! termina imediatamente (o término vence qualquer gatilho daquele tick);
//! caso contrário a política de gatilho é consultada e a ação devolvida é
//! aplicada ao contexto. Se a ação bloqueou a própria thread, o quantum é
//! truncado.
//!
//! ## Sincronização
//! Nenhuma: o estado compartilhado é acessado por este único fluxo de
//! controle. O ponto delicado é outro — um signal no turno de uma thread
//! pode acordar outra no meio da varredura, então o estado é relido no topo
//! de cada turno.

use crate::core::context::SimContext;
use crate::sched::debug;
use crate::sched::task::ThreadState;
use crate::sched::trigger::TriggerPolicy;
use crate::sys::{SchedError, Tid};

/// Executa a simulação até o ponto fixo global (todas Terminated).
///
/// Retorna `Err(SchedError::Deadlock)` se uma varredura inteira não
/// encontrar nenhuma thread executável enquanto ainda há threads vivas:
/// como apenas threads em execução emitem signals, nada mais progride.
///
/// # Panics
/// Quantum zero é erro de configuração, fatal.
pub fn run_round_robin(
    ctx: &mut SimContext,
    quantum: u32,
    policy: &mut dyn TriggerPolicy,
) -> Result<(), SchedError> {
    assert!(quantum > 0, "quantum deve ser positivo");

    crate::sinfo!("===== Starting Round Robin Scheduler (quantum {quantum}) =====");

    loop {
        let mut all_done = true;
        let mut dispatched_any = false;

        for tid in ctx.threads.tids().collect::<Vec<_>>() {
            // Reler o estado a cada turno: um signal anterior nesta mesma
            // varredura pode ter acordado esta thread.
            let state = ctx.threads.get(tid).state;

            if state == ThreadState::Terminated {
                continue;
            }
            all_done = false;

            if state == ThreadState::Blocked {
                continue;
            }
            dispatched_any = true;

            ctx.threads.get_mut(tid).state = ThreadState::Running;
            crate::sinfo!("[RUNNING] Thread {tid}");

            run_quantum(ctx, tid, quantum, policy);

            // Se o quantum acabou com a thread ainda Running, ela volta
            // para o fundo da ordem lógica de dispatch.
            let t = ctx.threads.get_mut(tid);
            if t.state == ThreadState::Running {
                t.state = ThreadState::Ready;
            }

            debug::dump_threads(ctx);
        }

        if all_done {
            break;
        }

        if !dispatched_any {
            let blocked = stuck_threads(ctx);
            crate::serror!("varredura sem thread executavel: deadlock");
            for tid in &blocked {
                let t = ctx.threads.get(*tid);
                crate::serror!(
                    "  Thread {} presa em {} ({} / {} ticks)",
                    tid,
                    ctx.wait_label(t.waiting_on),
                    t.cpu_used,
                    t.burst_time
                );
            }
            return Err(SchedError::Deadlock { blocked });
        }
    }

    crate::sinfo!("===== All Threads Completed =====");
    Ok(())
}

/// Concede até `quantum` ticks à thread corrente.
fn run_quantum(ctx: &mut SimContext, tid: Tid, quantum: u32, policy: &mut dyn TriggerPolicy) {
    for _ in 0..quantum {
        let t = ctx.threads.get_mut(tid);
        t.cpu_used += 1;
        let (cpu, burst) = (t.cpu_used, t.burst_time);
        crate::strace!("  Tick: CPU used = {cpu}/{burst}");

        // Término vence qualquer gatilho deste tick
        if cpu == burst {
            t.state = ThreadState::Terminated;
            crate::sinfo!("  -> Thread {tid} TERMINATED");
            break;
        }

        if let Some(action) = policy.on_tick(tid, cpu) {
            ctx.apply(tid, action);
        }

        // A ação pode ter bloqueado a própria thread: quantum truncado
        if ctx.threads.get(tid).state != ThreadState::Running {
            break;
        }
    }
}

fn stuck_threads(ctx: &SimContext) -> Vec<Tid> {
    ctx.threads
        .tids()
        .filter(|&tid| ctx.threads.get(tid).state == ThreadState::Blocked)
        .collect()
}
