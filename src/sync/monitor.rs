//! Monitor simulado
//!
//! Composição clássica: um semáforo interno de exclusão mútua (threshold 1)
//! mais uma fila FIFO de condição, separada de qualquer fila de semáforo.
//!
//! O comportamento definidor está em [`Monitor::condition_wait`]: esperar
//! na condição libera o token de exclusão, para que outra thread possa
//! entrar e eventualmente sinalizar. A thread acordada NÃO recebe o token
//! de volta — ela disputa a entrada de novo pelo caminho normal de
//! [`Monitor::enter`] numa varredura futura do escalonador.

use std::collections::VecDeque;

use crate::sched::task::{ThreadRegistry, WaitChannel};
use crate::sync::Semaphore;
use crate::sys::Tid;

/// Monitor: região de exclusão mútua + variável de condição
#[derive(Debug)]
pub struct Monitor {
    /// Token de exclusão mútua (no máximo uma thread o detém)
    lock: Semaphore,
    /// Fila FIFO de threads esperando a condição
    condition_queue: VecDeque<Tid>,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Monitor {
    pub fn new() -> Self {
        Self {
            lock: Semaphore::new("MUTEX", WaitChannel::MonitorLock, 1),
            condition_queue: VecDeque::new(),
        }
    }

    /// Semáforo interno, exposto para observação (contador do token)
    pub fn lock(&self) -> &Semaphore {
        &self.lock
    }

    pub fn condition_queue_len(&self) -> usize {
        self.condition_queue.len()
    }

    /// Entra no monitor: adquire o token, podendo bloquear como num wait
    /// de semáforo comum.
    pub fn enter(&mut self, tid: Tid, threads: &mut ThreadRegistry) {
        crate::sdebug!("Thread {} ENTER monitor", tid);
        self.lock.wait(tid, threads);
    }

    /// Sai do monitor: libera o token e acorda a espera de entrada mais
    /// antiga, se houver.
    pub fn exit(&mut self, tid: Tid, threads: &mut ThreadRegistry) {
        crate::sdebug!("Thread {} EXIT monitor", tid);
        self.lock.signal(threads);
    }

    /// Espera na condição.
    ///
    /// Enfileira a chamadora na fila de condição, bloqueia com canal
    /// `MonitorCondition` e libera o token via signal do semáforo interno.
    /// Não há re-aquisição automática ao acordar.
    pub fn condition_wait(&mut self, tid: Tid, threads: &mut ThreadRegistry) {
        crate::sdebug!("Thread {} WAIT on MonitorCV", tid);

        self.condition_queue.push_back(tid);
        threads.get_mut(tid).set_blocked(WaitChannel::MonitorCondition);

        // Libera o lock do monitor para que outra thread possa entrar
        self.lock.signal(threads);
    }

    /// Sinaliza a condição.
    ///
    /// Acorda no máximo a cabeça da fila (Ready, canal limpo), sem
    /// transferir o token. Fila vazia = wakeup perdido (sem bufferização).
    pub fn condition_signal(&mut self, tid: Tid, threads: &mut ThreadRegistry) {
        crate::sdebug!("Thread {} SIGNAL MonitorCV", tid);

        if let Some(woken) = self.condition_queue.pop_front() {
            crate::sdebug!("  -> MonitorCV wakes Thread {}", woken);
            threads.get_mut(woken).set_ready();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::task::ThreadState;

    fn registry(n: usize) -> ThreadRegistry {
        let mut reg = ThreadRegistry::new();
        for _ in 0..n {
            reg.create(10, 1);
        }
        reg
    }

    #[test]
    fn segunda_entrada_bloqueia_enquanto_token_detido() {
        let mut reg = registry(2);
        let mut m = Monitor::new();
        let (a, b) = (Tid::new(0), Tid::new(1));

        m.enter(a, &mut reg);
        assert_eq!(reg.get(a).state, ThreadState::Ready); // entrou sem bloquear

        // Exclusão mútua: b enfileira em vez de retornar imediatamente
        m.enter(b, &mut reg);
        assert_eq!(reg.get(b).state, ThreadState::Blocked);
        assert_eq!(reg.get(b).waiting_on, WaitChannel::MonitorLock);
        assert_eq!(m.lock().value(), -1);

        // exit de a entrega a vez para b
        m.exit(a, &mut reg);
        assert_eq!(reg.get(b).state, ThreadState::Ready);
        assert_eq!(m.lock().value(), 0);
    }

    #[test]
    fn condition_wait_libera_o_token() {
        let mut reg = registry(2);
        let mut m = Monitor::new();
        let (a, b) = (Tid::new(0), Tid::new(1));

        m.enter(a, &mut reg);
        m.condition_wait(a, &mut reg);

        assert_eq!(reg.get(a).state, ThreadState::Blocked);
        assert_eq!(reg.get(a).waiting_on, WaitChannel::MonitorCondition);
        assert_eq!(m.condition_queue_len(), 1);
        // Lock livre: contador de volta a 1
        assert!(m.lock().value() >= 1);

        // Uma segunda thread entra imediatamente
        m.enter(b, &mut reg);
        assert_eq!(reg.get(b).state, ThreadState::Ready);
    }

    #[test]
    fn signal_acorda_cabeca_sem_transferir_token() {
        let mut reg = registry(3);
        let mut m = Monitor::new();
        let (a, b, c) = (Tid::new(0), Tid::new(1), Tid::new(2));

        m.enter(a, &mut reg);
        m.condition_wait(a, &mut reg);

        m.enter(b, &mut reg);
        m.condition_wait(b, &mut reg);

        m.enter(c, &mut reg);
        m.condition_signal(c, &mut reg);

        // Só a cabeça (a) acorda, e o token continua com c
        assert_eq!(reg.get(a).state, ThreadState::Ready);
        assert_eq!(reg.get(a).waiting_on, WaitChannel::None);
        assert_eq!(reg.get(b).state, ThreadState::Blocked);
        assert_eq!(m.condition_queue_len(), 1);
        assert_eq!(m.lock().value(), 0);

        // a precisa re-entrar pelo caminho normal — e bloqueia, pois c detém o token
        m.enter(a, &mut reg);
        assert_eq!(reg.get(a).state, ThreadState::Blocked);
        assert_eq!(reg.get(a).waiting_on, WaitChannel::MonitorLock);
    }

    #[test]
    fn signal_com_fila_vazia_e_wakeup_perdido() {
        let mut reg = registry(2);
        let mut m = Monitor::new();
        let (a, b) = (Tid::new(0), Tid::new(1));

        m.enter(a, &mut reg);
        m.condition_signal(a, &mut reg); // ninguém esperando: nada acontece
        assert_eq!(m.condition_queue_len(), 0);
        assert_eq!(m.lock().value(), 0);

        // O signal não fica bufferizado: um wait posterior bloqueia normalmente
        m.exit(a, &mut reg);
        m.enter(b, &mut reg);
        m.condition_wait(b, &mut reg);
        assert_eq!(reg.get(b).state, ThreadState::Blocked);
    }
}
