#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Editing,
    Submitting,
}

/// a required field was left blank. Submission is blocked without showing a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
}

/// the input fields behind one of the create modals
pub trait FormBuffer: Default {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SemesterForm {
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubjectForm {
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResourceForm {
    pub title: String,
    pub drive_link: String,
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError { field })
    } else {
        Ok(())
    }
}

impl FormBuffer for SemesterForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")
    }
}

impl FormBuffer for SubjectForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")
    }
}

impl FormBuffer for ResourceForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "title")?;
        require(&self.drive_link, "drive_link")
    }
}

/// why a submit didn't reach the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// the modal isn't open for editing
    NotOpen,
    /// the parent the record would belong to isn't selected
    NoParent,
    Invalid(ValidationError),
}

/// Create modal state for one entity kind: `Closed -> Editing -> Submitting -> Closed`.
/// A failed submit drops back to `Editing` with the buffer untouched so it can be resubmitted
#[derive(Debug, Default)]
pub struct EntityForm<B> {
    state: FormState,
    buffer: B,
}

impl<B: FormBuffer> EntityForm<B> {
    /// opens the modal with an empty buffer. Opening an already open modal changes nothing
    pub fn open(&mut self) {
        if self.state == FormState::Closed {
            self.buffer = B::default();
            self.state = FormState::Editing;
        }
    }

    /// closes the modal and discards whatever was typed
    pub fn cancel(&mut self) {
        if self.state == FormState::Editing {
            self.buffer = B::default();
            self.state = FormState::Closed;
        }
    }

    /// the buffer is only editable while the modal is open and not submitting
    pub fn buffer_mut(&mut self) -> Option<&mut B> {
        match self.state {
            FormState::Editing => Some(&mut self.buffer),
            _ => None,
        }
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    /// moves to `Submitting` if the buffer is complete, handing back a copy of it to send
    pub fn begin_submit(&mut self) -> Result<B, SubmitBlocked>
    where
        B: Clone,
    {
        if self.state != FormState::Editing {
            return Err(SubmitBlocked::NotOpen);
        }
        self.buffer.validate().map_err(SubmitBlocked::Invalid)?;
        self.state = FormState::Submitting;
        Ok(self.buffer.clone())
    }

    /// the store accepted the record
    pub fn succeed(&mut self) {
        self.buffer = B::default();
        self.state = FormState::Closed;
    }

    /// the store rejected the record. The modal stays open with the input kept
    pub fn fail(&mut self) {
        self.state = FormState::Editing;
    }
}
