use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::cursor::{CursorChange, CursorTracker};
use crate::error::TuioError;
use crate::listener::TuioListener;
use crate::osc::OscPacket;

/// Port TUIO trackers send to unless configured otherwise.
pub const DEFAULT_PORT: u16 = 3333;

/// Largest UDP payload.
const MAX_DATAGRAM: usize = 65_536;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TuioSettings {
    /// UDP port to listen on; 0 picks a free one.
    pub port: u16,
    pub bind_address: IpAddr,
    /// How long the receive thread blocks before rechecking for shutdown.
    /// Must be non-zero.
    pub read_timeout: Duration,
}

impl Default for TuioSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            read_timeout: Duration::from_millis(50),
        }
    }
}

impl TuioSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_bind_address(mut self, address: IpAddr) -> Self {
        self.bind_address = address;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}

/// TUIO 1.1 cursor client.
///
/// [`connect`](Self::connect) binds a UDP socket and starts a named receive
/// thread that decodes `/tuio/2Dcur` frames and reports cursor changes to a
/// [`TuioListener`]. Dropping the client disconnects it.
pub struct TuioClient {
    settings: TuioSettings,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    listener: Option<Arc<dyn TuioListener>>,
    local_addr: Option<SocketAddr>,
}

impl TuioClient {
    pub fn new(settings: TuioSettings) -> Self {
        Self {
            settings,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
            listener: None,
            local_addr: None,
        }
    }

    /// Client on `port` with otherwise default settings.
    pub fn with_port(port: u16) -> Self {
        Self::new(TuioSettings::default().with_port(port))
    }

    pub fn connect(&mut self, listener: Arc<dyn TuioListener>) -> Result<(), TuioError> {
        if self.handle.is_some() {
            return Err(TuioError::AlreadyConnected);
        }

        let socket = UdpSocket::bind((self.settings.bind_address, self.settings.port))
            .map_err(TuioError::Bind)?;
        socket
            .set_read_timeout(Some(self.settings.read_timeout))
            .map_err(TuioError::Bind)?;
        let local_addr = socket.local_addr().map_err(TuioError::Bind)?;

        self.running.store(true, Ordering::SeqCst);
        listener.connection_changed(true);

        let running = Arc::clone(&self.running);
        let thread_listener = Arc::clone(&listener);
        let spawned = thread::Builder::new()
            .name("tapline-tuio".to_string())
            .spawn(move || receive_loop(socket, running, thread_listener));
        let handle = match spawned {
            Ok(handle) => handle,
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                listener.connection_changed(false);
                return Err(TuioError::Spawn(err));
            }
        };

        log::debug!("TUIO client listening on {local_addr}");
        self.handle = Some(handle);
        self.listener = Some(listener);
        self.local_addr = Some(local_addr);
        Ok(())
    }

    /// Stops the receive thread, ends every live cursor and notifies the
    /// listener. Does nothing when not connected.
    pub fn disconnect(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.running.store(false, Ordering::SeqCst);
        if handle.join().is_err() {
            log::warn!("TUIO receive thread panicked");
        }
        if let Some(listener) = self.listener.take() {
            listener.connection_changed(false);
        }
        if let Some(addr) = self.local_addr.take() {
            log::debug!("TUIO client on {addr} disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.handle.is_some() && self.running.load(Ordering::SeqCst)
    }

    /// Bound socket address while connected.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    pub fn settings(&self) -> &TuioSettings {
        &self.settings
    }
}

impl Default for TuioClient {
    fn default() -> Self {
        Self::new(TuioSettings::default())
    }
}

impl Drop for TuioClient {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn receive_loop(socket: UdpSocket, running: Arc<AtomicBool>, listener: Arc<dyn TuioListener>) {
    let mut tracker = CursorTracker::new();
    let mut buf = vec![0u8; MAX_DATAGRAM];

    while running.load(Ordering::SeqCst) {
        let len = match socket.recv_from(&mut buf) {
            Ok((len, _)) => len,
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut | io::ErrorKind::Interrupted
                ) =>
            {
                continue;
            }
            Err(err) => {
                log::warn!("TUIO receive failed: {err}");
                continue;
            }
        };

        let packet = match OscPacket::decode(&buf[..len]) {
            Ok(packet) => packet,
            Err(err) => {
                log::debug!("skipping malformed TUIO packet: {err}");
                continue;
            }
        };
        packet.for_each_message(&mut |message| {
            for change in tracker.handle_message(message) {
                deliver(listener.as_ref(), change);
            }
        });
    }

    for change in tracker.reset() {
        deliver(listener.as_ref(), change);
    }
}

fn deliver(listener: &dyn TuioListener, change: CursorChange) {
    match change {
        CursorChange::Added { session, position } => {
            listener.cursor_added(session, position.x, position.y)
        }
        CursorChange::Updated { session, position } => {
            listener.cursor_updated(session, position.x, position.y)
        }
        CursorChange::Removed { session, position } => {
            listener.cursor_removed(session, position.x, position.y)
        }
    }
}
