#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleApi,
    ConfigModuleCache,
    PromptSelectModules,
    PromptApiUrl,
    PromptStaleTime,
    InvalidEnvValue(String, String), // variable, value

    // === LOADING MESSAGES ===
    LoadingDashboard,
    LoadingTasks,
    LoadingProjects,
    LoadingProject,
    LoadingTask,
    LoadingPlaceholder,

    // === ERROR PANEL MESSAGES ===
    ErrorLoading(String),   // what
    BackendHint(String),    // api url
    ProjectNotFoundHint,
    TaskNotFoundHint,
    ErrorDetail(String),

    // === DASHBOARD MESSAGES ===
    DashboardTitle,
    DashboardWelcome,
    RecentTasksHeader,
    ProjectsHeader,
    ProjectTasksCompleted(u32, u32), // completed, total

    // === TASK MESSAGES ===
    TasksHeader,
    TotalTasks(usize),
    FilterApplied(String),
    NoTasksMatchFilter,
    NoTasksInProject,
    ProgressSummary(usize, usize), // done, total
    SubtasksHeader(usize, usize),  // completed, total
    CommentsHeader(usize),
    NoComments,
    DescriptionHeader,
    DetailsHeader,
    TaskToggled { title: String, status: String },
    SubtaskToggled { title: String, completed: bool },
    SubtaskNotFound(String),
    TaskUpdateFailed(String),

    // === NEW TASK FORM ===
    NewTaskTitle,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskPriority,
    PromptTaskDueDate,
    InvalidDueDate(String),
    PromptTaskProject,
    TaskCreatedPlaceholder(String), // title
    NewTaskNotPersisted,

    // === BROWSE SESSION ===
    BrowseWelcome,
    PromptBrowseAction,
    PromptSelectTask,
    PromptSelectProject,
    PromptSelectFilter,
    PromptSelectSubtask,
    BrowseGoodbye,
    NothingToSelect,
}
