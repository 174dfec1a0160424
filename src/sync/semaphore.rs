//! Semáforo de contagem simulado
//!
//! Contador inteiro (pode ficar negativo) + fila FIFO de tids bloqueados.
//! Invariante: entre operações, `wait_queue.len() == max(0, -value)` —
//! a magnitude negativa do contador é exatamente o número de esperas.

use std::collections::VecDeque;

use crate::sched::task::{ThreadRegistry, WaitChannel};
use crate::sys::Tid;

/// Semáforo de contagem
#[derive(Debug)]
pub struct Semaphore {
    /// Nome fixo, atribuído na construção (apenas exibição)
    name: String,
    /// Canal estampado nos TCBs bloqueados por este semáforo
    channel: WaitChannel,
    /// Contador; negativo = número de threads esperando
    value: i32,
    /// Fila FIFO de threads bloqueadas
    wait_queue: VecDeque<Tid>,
}

impl Semaphore {
    pub fn new(name: impl Into<String>, channel: WaitChannel, initial: i32) -> Self {
        Self {
            name: name.into(),
            channel,
            value: initial,
            wait_queue: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn queue_len(&self) -> usize {
        self.wait_queue.len()
    }

    /// Decrementa (P/wait/acquire).
    ///
    /// Se o contador ficar negativo, a thread chamadora é enfileirada
    /// (exatamente uma vez) e bloqueada; caso contrário ela segue rodando.
    /// O efeito no TCB é síncrono e observável imediatamente.
    pub fn wait(&mut self, tid: Tid, threads: &mut ThreadRegistry) {
        self.value -= 1;
        if self.value < 0 {
            crate::sdebug!("  -> Thread {} BLOCKED on {}", tid, self.name);
            self.wait_queue.push_back(tid);
            threads.get_mut(tid).set_blocked(self.channel);
        } else {
            crate::sdebug!("  -> Thread {} acquired {}", tid, self.name);
        }
    }

    /// Incrementa (V/signal/release).
    ///
    /// Com o contador ainda não-positivo, acorda a cabeça da fila (Ready,
    /// canal limpo). Com fila vazia o signal apenas sobe o contador,
    /// permitindo uma aquisição futura imediata.
    pub fn signal(&mut self, threads: &mut ThreadRegistry) {
        self.value += 1;
        if self.value <= 0 {
            match self.wait_queue.pop_front() {
                Some(tid) => {
                    crate::sdebug!("  -> SIGNAL {}: unblocked Thread {}", self.name, tid);
                    threads.get_mut(tid).set_ready();
                }
                None => {
                    // Fila vazia com contador <= 0 viola a invariante
                    // fila == max(0, -contador); defendemos como wake nulo.
                    crate::swarn!("  -> SIGNAL {}: queue empty at value {}", self.name, self.value);
                }
            }
        } else {
            crate::sdebug!("  -> SIGNAL {}: no waiting threads", self.name);
        }
    }

    /// Checagem da invariante contador/fila (pontos quiescentes)
    pub fn queue_matches_value(&self) -> bool {
        self.wait_queue.len() == usize::try_from(-self.value).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::task::ThreadState;
    use crate::sys::SemId;

    fn sem(initial: i32) -> Semaphore {
        Semaphore::new("S1", WaitChannel::Semaphore(SemId::new(0)), initial)
    }

    fn registry(n: usize) -> ThreadRegistry {
        let mut reg = ThreadRegistry::new();
        for _ in 0..n {
            reg.create(10, 1);
        }
        reg
    }

    #[test]
    fn cenario_classico_wait_wait_signal() {
        // S inicializado em 1; A adquire, B bloqueia, signal de A acorda B.
        let mut reg = registry(2);
        let mut s = sem(1);
        let (a, b) = (Tid::new(0), Tid::new(1));

        s.wait(a, &mut reg);
        assert_eq!(s.value(), 0);
        assert_eq!(reg.get(a).state, ThreadState::Ready);

        s.wait(b, &mut reg);
        assert_eq!(s.value(), -1);
        assert_eq!(reg.get(b).state, ThreadState::Blocked);
        assert_eq!(reg.get(b).waiting_on, WaitChannel::Semaphore(SemId::new(0)));
        assert_eq!(s.queue_len(), 1);

        s.signal(&mut reg);
        assert_eq!(s.value(), 0);
        assert_eq!(s.queue_len(), 0);
        assert_eq!(reg.get(b).state, ThreadState::Ready);
        assert_eq!(reg.get(b).waiting_on, WaitChannel::None);
    }

    #[test]
    fn bloqueio_enfileira_exatamente_uma_vez() {
        let mut reg = registry(1);
        let mut s = sem(0);

        s.wait(Tid::new(0), &mut reg);
        assert_eq!(s.queue_len(), 1);
        assert!(s.queue_matches_value());
    }

    #[test]
    fn fila_espelha_magnitude_negativa_do_contador() {
        let mut reg = registry(4);
        let mut s = sem(1);

        for tid in reg.tids().collect::<Vec<_>>() {
            s.wait(tid, &mut reg);
            assert!(s.queue_matches_value());
        }
        assert_eq!(s.value(), -3);
        assert_eq!(s.queue_len(), 3);

        for _ in 0..3 {
            s.signal(&mut reg);
            assert!(s.queue_matches_value());
        }
        assert_eq!(s.value(), 0);
        assert_eq!(s.queue_len(), 0);
    }

    #[test]
    fn desbloqueio_em_ordem_fifo() {
        let mut reg = registry(3);
        let mut s = sem(0);
        let tids: Vec<Tid> = reg.tids().collect();

        for &tid in &tids {
            s.wait(tid, &mut reg);
        }

        // Acorda na ordem de chegada
        s.signal(&mut reg);
        assert_eq!(reg.get(tids[0]).state, ThreadState::Ready);
        assert_eq!(reg.get(tids[1]).state, ThreadState::Blocked);

        s.signal(&mut reg);
        assert_eq!(reg.get(tids[1]).state, ThreadState::Ready);
        assert_eq!(reg.get(tids[2]).state, ThreadState::Blocked);
    }

    #[test]
    fn signal_sem_esperas_apenas_incrementa() {
        let mut reg = registry(1);
        let mut s = sem(1);

        s.signal(&mut reg);
        s.signal(&mut reg);
        assert_eq!(s.value(), 3);
        assert_eq!(s.queue_len(), 0);

        // Repetível, sem efeito além do contador
        let before = reg.snapshot();
        s.signal(&mut reg);
        assert_eq!(s.value(), 4);
        for (t, old) in reg.snapshot().iter().zip(before.iter()) {
            assert_eq!(t.state, old.state);
        }
    }

    #[test]
    fn thread_acordada_vai_para_ready_nao_running() {
        let mut reg = registry(2);
        let mut s = sem(0);

        s.wait(Tid::new(0), &mut reg);
        s.signal(&mut reg);
        assert_eq!(reg.get(Tid::new(0)).state, ThreadState::Ready);
    }
}
