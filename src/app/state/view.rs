/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Signalisiert dem Host, dass die Szene neu gezeichnet werden muss
    pub redraw_requested: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            redraw_requested: false,
        }
    }

    /// Fordert einen Redraw an.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Liefert und quittiert eine offene Redraw-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
