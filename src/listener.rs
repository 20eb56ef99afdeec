use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, TcpListener};

use socket2::SockRef;

/// Ouvre le port sur toutes les interfaces, IPv6 et IPv4.
///
/// `[::]` est tenté d'abord : s'il est dual-stack il couvre aussi IPv4,
/// sinon un second socket est ouvert sur `0.0.0.0`. Sans IPv6 sur l'hôte,
/// seul IPv4 est ouvert. Un port déjà pris reste une erreur.
pub fn bind_all(port: u16) -> io::Result<Vec<TcpListener>> {
    let listeners = match TcpListener::bind((Ipv6Addr::UNSPECIFIED, port)) {
        Ok(v6) => {
            if SockRef::from(&v6).only_v6()? {
                let v4 = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))?;
                vec![v6, v4]
            } else {
                vec![v6]
            }
        }
        Err(err) if err.kind() == io::ErrorKind::AddrInUse => return Err(err),
        Err(err) => {
            tracing::warn!(%err, "IPv6 unavailable, listening on IPv4 only");
            vec![TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))?]
        }
    };

    for listener in &listeners {
        listener.set_nonblocking(true)?;
    }
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpStream;

    fn free_port() -> u16 {
        TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port()
    }

    #[test]
    fn test_accepts_ipv4_connections() {
        let port = free_port();
        let listeners = bind_all(port).unwrap();

        assert!(!listeners.is_empty());
        assert!(listeners.iter().all(|l| l.local_addr().unwrap().port() == port));
        assert!(TcpStream::connect(("127.0.0.1", port)).is_ok());
    }

    #[test]
    fn test_accepts_ipv6_connections_when_available() {
        if TcpListener::bind("[::1]:0").is_err() {
            return;
        }

        let port = free_port();
        let _listeners = bind_all(port).unwrap();

        assert!(TcpStream::connect(("::1", port)).is_ok());
    }

    #[test]
    fn test_port_in_use_is_an_error() {
        let port = free_port();
        let _taken = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).unwrap();

        let err = bind_all(port).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
    }
}
